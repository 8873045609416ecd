//! Lead submission errors.

use thiserror::Error;

use super::validation::ValidationErrors;
use crate::http::HttpError;

/// Why a lead was not accepted.
///
/// Nothing here is retried: each variant is shown to the visitor once and
/// resubmitting is up to them.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The form failed local checks; nothing was sent.
    #[error("Invalid contact form: {0}")]
    Validation(ValidationErrors),

    /// The management service could not be reached.
    #[error("Could not reach the management service: {0}")]
    Connectivity(#[from] HttpError),

    /// The management service answered with a non-2xx status.
    #[error("Management service rejected the lead ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Remote {
        status: u16,
        message: Option<String>,
    },

    /// The request body could not be encoded.
    #[error("Failed to encode lead: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl SubmissionError {
    /// Server-provided message, for remote rejections that carried one.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}

impl From<ValidationErrors> for SubmissionError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_display() {
        let err = SubmissionError::Remote {
            status: 500,
            message: Some("db down".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Management service rejected the lead (500): db down"
        );
        assert_eq!(err.remote_message(), Some("db down"));

        let bare = SubmissionError::Remote {
            status: 403,
            message: None,
        };
        assert!(bare.to_string().ends_with("no message"));
    }

    #[test]
    fn test_connectivity_from_http_error() {
        let err: SubmissionError = HttpError::Connect("refused".to_string()).into();
        assert!(err.is_connectivity());
        assert!(!err.is_validation());
        assert_eq!(err.remote_message(), None);
    }
}
