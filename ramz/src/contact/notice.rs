//! Transient notifications shown after a submission.

use std::fmt;

use super::error::SubmissionError;
use super::pipeline::Confirmation;
use crate::i18n::LanguageContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A toast-style message in the visitor's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(confirmation: &Confirmation, i18n: &LanguageContext) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: confirmation
                .message
                .clone()
                .unwrap_or_else(|| i18n.t("contact_form_success")),
        }
    }

    /// Server text wins over dictionary text whenever the server sent one.
    pub fn error(error: &SubmissionError, i18n: &LanguageContext) -> Self {
        let message = match error {
            SubmissionError::Validation(errors) => i18n.t(errors.first().message_key),
            SubmissionError::Connectivity(_) => i18n.t("contact_error_connectivity"),
            SubmissionError::Remote { message, .. } => message
                .clone()
                .unwrap_or_else(|| i18n.t("contact_validation_error_send")),
            SubmissionError::Encoding(_) => i18n.t("contact_form_error"),
        };
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }

    pub fn from_result(
        result: &Result<Confirmation, SubmissionError>,
        i18n: &LanguageContext,
    ) -> Self {
        match result {
            Ok(confirmation) => Self::success(confirmation, i18n),
            Err(error) => Self::error(error, i18n),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            NoticeLevel::Success => "✓",
            NoticeLevel::Error => "✗",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{validate, ContactLead};
    use crate::http::HttpError;
    use crate::i18n::{Dictionary, Language};

    fn english() -> LanguageContext {
        LanguageContext::new(Language::En)
    }

    #[test]
    fn test_success_prefers_server_message() {
        let i18n = english();
        let with_message = Confirmation {
            status: 200,
            message: Some("Received".to_string()),
        };
        let without = Confirmation {
            status: 200,
            message: None,
        };

        assert_eq!(Notice::success(&with_message, &i18n).message, "Received");
        assert_eq!(
            Notice::success(&without, &i18n).message,
            Dictionary::builtin(Language::En).translate("contact_form_success")
        );
    }

    #[test]
    fn test_validation_uses_first_violation() {
        let i18n = english();
        let lead = ContactLead::new("Omar", "bad", "123", "design", "Long enough message");
        let errors = validate(&lead).unwrap_err();

        let notice = Notice::error(&SubmissionError::Validation(errors), &i18n);

        assert!(notice.is_error());
        assert_eq!(notice.message, "Invalid email address");
    }

    #[test]
    fn test_connectivity_and_remote_messages() {
        let i18n = english();
        let offline = SubmissionError::Connectivity(HttpError::Connect("refused".to_string()));
        assert_eq!(
            Notice::error(&offline, &i18n).message,
            i18n.t("contact_error_connectivity")
        );

        let remote = SubmissionError::Remote {
            status: 500,
            message: None,
        };
        assert_eq!(
            Notice::error(&remote, &i18n).message,
            "Failed to send message"
        );
    }

    #[test]
    fn test_follows_language_switch() {
        let i18n = english();
        let remote = SubmissionError::Remote {
            status: 500,
            message: None,
        };
        i18n.set(Language::Ar);
        assert_eq!(Notice::error(&remote, &i18n).message, "فشل إرسال الرسالة");
    }
}
