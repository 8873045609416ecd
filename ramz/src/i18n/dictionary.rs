//! String-keyed translation tables.

use super::language::Language;
use std::collections::HashMap;
use tracing::warn;

/// Translations for one language.
///
/// Lookups never fail: a missing key logs a warning and comes back as
/// the key itself, so the UI shows something readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    language: Language,
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            entries: HashMap::new(),
        }
    }

    /// Dictionary with the site's bundled strings.
    pub fn builtin(language: Language) -> Self {
        let table = match language {
            Language::Ar => AR,
            Language::En => EN,
        };
        let mut dictionary = Self::new(language);
        for (key, value) in table {
            dictionary.insert(*key, *value);
        }
        dictionary
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The entry for `key`, or `key` itself when there is none.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) => value,
            None => {
                warn!(language = %self.language, key = key, "Missing translation");
                key
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

const AR: &[(&str, &str)] = &[
    ("contact_form_name", "الاسم"),
    ("contact_form_email", "البريد الإلكتروني"),
    ("contact_form_phone", "رقم الهاتف"),
    ("contact_form_service", "الخدمة المطلوبة"),
    ("contact_form_message", "الرسالة"),
    ("contact_form_service_design", "التصميم الجرافيكي"),
    ("contact_form_service_video", "المونتاج والتحرير"),
    ("contact_form_service_animation", "الأنيميشن والموشن جرافيك"),
    ("contact_form_service_other", "أخرى"),
    ("contact_form_submitting", "جاري الإرسال..."),
    ("contact_form_success", "تم إرسال رسالتك بنجاح! سنتواصل معك قريباً."),
    ("contact_form_error", "حدث خطأ أثناء إرسال الرسالة. يرجى المحاولة مرة أخرى."),
    ("contact_validation_name_min", "الاسم يجب أن يكون على الأقل حرفين"),
    ("contact_validation_name_max", "الاسم طويل جداً"),
    ("contact_validation_email", "البريد الإلكتروني غير صحيح"),
    ("contact_validation_phone_min", "رقم الهاتف غير صحيح"),
    ("contact_validation_phone_max", "رقم الهاتف طويل جداً"),
    ("contact_validation_service", "يرجى اختيار خدمة"),
    ("contact_validation_message_min", "الرسالة يجب أن تكون على الأقل 10 أحرف"),
    ("contact_validation_message_max", "الرسالة طويلة جداً"),
    ("contact_validation_error_send", "فشل إرسال الرسالة"),
    (
        "contact_error_connectivity",
        "تعذر الاتصال بنظام الإدارة. يرجى المحاولة مرة أخرى لاحقاً.",
    ),
    ("gallery_images_coming_soon", "جاري إضافة الصور قريباً..."),
];

const EN: &[(&str, &str)] = &[
    ("contact_form_name", "Name"),
    ("contact_form_email", "Email"),
    ("contact_form_phone", "Phone Number"),
    ("contact_form_service", "Required Service"),
    ("contact_form_message", "Message"),
    ("contact_form_service_design", "Graphic Design"),
    ("contact_form_service_video", "Video Editing"),
    ("contact_form_service_animation", "Animation & Motion Graphics"),
    ("contact_form_service_other", "Other"),
    ("contact_form_submitting", "Sending..."),
    (
        "contact_form_success",
        "Your message has been sent successfully! We will contact you soon.",
    ),
    (
        "contact_form_error",
        "An error occurred while sending the message. Please try again.",
    ),
    ("contact_validation_name_min", "Name must be at least 2 characters"),
    ("contact_validation_name_max", "Name is too long"),
    ("contact_validation_email", "Invalid email address"),
    ("contact_validation_phone_min", "Invalid phone number"),
    ("contact_validation_phone_max", "Phone number is too long"),
    ("contact_validation_service", "Please select a service"),
    ("contact_validation_message_min", "Message must be at least 10 characters"),
    ("contact_validation_message_max", "Message is too long"),
    ("contact_validation_error_send", "Failed to send message"),
    (
        "contact_error_connectivity",
        "Could not reach the management system. Please try again later.",
    ),
    ("gallery_images_coming_soon", "Images coming soon..."),
];
