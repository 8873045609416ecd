//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use ramz::config::ConfigFileError;
use ramz::contact::SubmissionError;
use ramz::http::HttpError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to create the HTTP client
    HttpClient(HttpError),
    /// Bad command-line argument
    InvalidArgument(String),
    /// Contact lead was not accepted
    Submission(SubmissionError),
}

impl CliError {
    /// Exit code for this error.
    ///
    /// Lead submission failures get their own codes so scripts can tell a
    /// bad form from an unreachable or unhappy server.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Submission(SubmissionError::Validation(_)) => 2,
            CliError::Submission(SubmissionError::Connectivity(_)) => 3,
            CliError::Submission(SubmissionError::Remote { .. }) => 4,
            _ => 1,
        }
    }

    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Submission(SubmissionError::Validation(errors)) => {
                eprintln!();
                for violation in errors.violations() {
                    eprintln!("  {}: {}", violation.field, violation.rule);
                }
            }
            CliError::Submission(SubmissionError::Connectivity(_)) => {
                eprintln!();
                eprintln!("Check management.api_url with: ramz config get management.api_url");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Use 'ramz config list' to see available keys.");
            }
            _ => {}
        }

        process::exit(self.exit_code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Submission(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::HttpClient(e) => Some(e),
            CliError::Submission(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<HttpError> for CliError {
    fn from(e: HttpError) -> Self {
        CliError::HttpClient(e)
    }
}

impl From<SubmissionError> for CliError {
    fn from(e: SubmissionError) -> Self {
        CliError::Submission(e)
    }
}
