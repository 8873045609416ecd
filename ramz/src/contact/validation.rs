//! Local validation of contact leads.
//!
//! Every rule runs, so one pass reports all the problems with a form.
//! Lengths are counted in characters, not bytes: Arabic names are
//! multi-byte in UTF-8.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::lead::ContactLead;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const PHONE_MIN_CHARS: usize = 10;
pub const PHONE_MAX_CHARS: usize = 15;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 500;

/// A form field, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    ServiceCategory,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ServiceCategory => "serviceCategory",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidFormat,
    Missing,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min } => write!(f, "shorter than {} characters", min),
            Self::TooLong { max } => write!(f, "longer than {} characters", max),
            Self::InvalidFormat => f.write_str("invalid format"),
            Self::Missing => f.write_str("missing"),
        }
    }
}

/// One broken rule, with the dictionary key of its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub rule: Rule,
    pub message_key: &'static str,
}

/// All violations found in a lead, in field order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> Vec<Field> {
        self.violations.iter().map(|v| v.field).collect()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn first(&self) -> &FieldViolation {
        // Constructed only from a non-empty list in `validate`.
        &self.violations[0]
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{} {}", v.field, v.rule))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9_'+\-]+(?:\.[A-Za-z0-9_'+\-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
        )
        .expect("Valid regex")
    })
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Check a lead against the form rules.
pub fn validate(lead: &ContactLead) -> Result<(), ValidationErrors> {
    let mut violations = Vec::new();

    check_length(
        &mut violations,
        Field::Name,
        &lead.name,
        NAME_MIN_CHARS,
        NAME_MAX_CHARS,
        ("contact_validation_name_min", "contact_validation_name_max"),
    );

    if !is_valid_email(&lead.email) {
        violations.push(FieldViolation {
            field: Field::Email,
            rule: Rule::InvalidFormat,
            message_key: "contact_validation_email",
        });
    }

    check_length(
        &mut violations,
        Field::Phone,
        &lead.phone,
        PHONE_MIN_CHARS,
        PHONE_MAX_CHARS,
        ("contact_validation_phone_min", "contact_validation_phone_max"),
    );

    if lead.service_category.code().is_empty() {
        violations.push(FieldViolation {
            field: Field::ServiceCategory,
            rule: Rule::Missing,
            message_key: "contact_validation_service",
        });
    }

    check_length(
        &mut violations,
        Field::Message,
        &lead.message,
        MESSAGE_MIN_CHARS,
        MESSAGE_MAX_CHARS,
        (
            "contact_validation_message_min",
            "contact_validation_message_max",
        ),
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { violations })
    }
}

fn check_length(
    violations: &mut Vec<FieldViolation>,
    field: Field,
    value: &str,
    min: usize,
    max: usize,
    (min_key, max_key): (&'static str, &'static str),
) {
    let chars = value.chars().count();
    if chars < min {
        violations.push(FieldViolation {
            field,
            rule: Rule::TooShort { min },
            message_key: min_key,
        });
    } else if chars > max {
        violations.push(FieldViolation {
            field,
            rule: Rule::TooLong { max },
            message_key: max_key,
        });
    }
}
