//! Contact leads and their wire format.

use serde::Serialize;
use std::fmt;

/// Service the visitor is asking about.
///
/// The form offers four codes. Anything else is carried through verbatim
/// so a newer form can talk to an older library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    Design,
    Video,
    Animation,
    Other,
    Custom(String),
}

impl ServiceCategory {
    /// Known categories in form order.
    pub const KNOWN: [ServiceCategory; 4] = [
        ServiceCategory::Design,
        ServiceCategory::Video,
        ServiceCategory::Animation,
        ServiceCategory::Other,
    ];

    pub fn from_code(code: &str) -> Self {
        match code {
            "design" => Self::Design,
            "video" => Self::Video,
            "animation" => Self::Animation,
            "other" => Self::Other,
            custom => Self::Custom(custom.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Design => "design",
            Self::Video => "video",
            Self::Animation => "animation",
            Self::Other => "other",
            Self::Custom(code) => code,
        }
    }

    /// Dictionary key of the label shown in the service picker.
    pub fn label_key(&self) -> Option<&'static str> {
        match self {
            Self::Design => Some("contact_form_service_design"),
            Self::Video => Some("contact_form_service_video"),
            Self::Animation => Some("contact_form_service_animation"),
            Self::Other => Some("contact_form_service_other"),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A filled-in contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_category: ServiceCategory,
    pub message: String,
}

impl ContactLead {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        service_category: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            service_category: ServiceCategory::from_code(service_category),
            message: message.into(),
        }
    }

    /// Body posted to the management API.
    pub(super) fn payload(&self) -> LeadPayload<'_> {
        LeadPayload {
            name: &self.name,
            email: &self.email,
            phone: &self.phone,
            mobile: &self.phone,
            company_name: self.service_category.code(),
            message: &self.message,
        }
    }
}

/// JSON body accepted by `/api/clients/submit`.
///
/// The backend has no separate mobile or service fields: `mobile` repeats
/// the phone number and `company_name` carries the service code.
#[derive(Debug, Serialize)]
pub(super) struct LeadPayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    mobile: &'a str,
    company_name: &'a str,
    message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_codes() {
        for category in ServiceCategory::KNOWN {
            assert_eq!(ServiceCategory::from_code(category.code()), category);
            assert!(category.label_key().is_some());
        }

        let custom = ServiceCategory::from_code("branding");
        assert_eq!(custom, ServiceCategory::Custom("branding".to_string()));
        assert_eq!(custom.code(), "branding");
        assert_eq!(custom.label_key(), None);
    }

    #[test]
    fn test_payload_shape() {
        let lead = ContactLead::new(
            "Sara",
            "sara@example.com",
            "0501234567",
            "video",
            "Need a promo cut",
        );
        let json: serde_json::Value = serde_json::to_value(lead.payload()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Sara",
                "email": "sara@example.com",
                "phone": "0501234567",
                "mobile": "0501234567",
                "company_name": "video",
                "message": "Need a promo cut",
            })
        );
    }
}
