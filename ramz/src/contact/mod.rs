//! Contact form submission.
//!
//! A [`ContactLead`] is checked locally first; only a lead that passes
//! every rule is posted to the management API. The outcome is either a
//! [`Confirmation`] or a [`SubmissionError`] that tells validation
//! problems, unreachable service and server rejection apart, and
//! [`Notice`] turns either into a message for the visitor.
//!
//! ```ignore
//! use ramz::contact::{ContactLead, ContactSubmissionPipeline, Notice};
//!
//! let pipeline = ContactSubmissionPipeline::from_settings(client, &config.management);
//! let result = pipeline.submit(&lead).await;
//! println!("{}", Notice::from_result(&result, &i18n));
//! ```

mod error;
mod lead;
mod notice;
mod pipeline;
mod validation;

pub use error::SubmissionError;
pub use lead::{ContactLead, ServiceCategory};
pub use notice::{Notice, NoticeLevel};
pub use pipeline::{
    Confirmation, ContactSubmissionPipeline, SubmissionStats, SubmissionStatsSnapshot,
    API_KEY_HEADER, SUBMIT_PATH,
};
pub use validation::{
    is_valid_email, validate, Field, FieldViolation, Rule, ValidationErrors, MESSAGE_MAX_CHARS,
    MESSAGE_MIN_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS, PHONE_MAX_CHARS, PHONE_MIN_CHARS,
};
