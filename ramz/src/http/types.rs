//! HTTP request and response types.

use std::fmt;
use thiserror::Error;

/// Inclusive byte range, as sent in a `Range: bytes=<start>-<end>` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Creates a range, swapping the bounds if given in reverse.
    pub fn new(start: u64, end: u64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Number of bytes covered (both bounds inclusive).
    ///
    /// Saturates at `u64::MAX` for the full `0..=u64::MAX` range.
    pub fn len(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    /// A range always covers at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value for the `Range` request header.
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }

    /// Key used to de-duplicate range requests (`"<start>-<end>"`).
    pub fn key(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Response returned by [`super::AsyncHttpClient`].
///
/// Non-2xx statuses are returned as responses rather than errors so that
/// callers can classify them (for example, to extract a server message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `206 Partial Content`, the only status that counts as a buffered range.
    pub fn is_partial_content(&self) -> bool {
        self.status == 206
    }
}

/// Transport-level failures. HTTP error statuses are not errors here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// Connection refused, host unreachable, DNS failure.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Request exceeded the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Request was aborted by its cancellation token.
    #[error("Request aborted")]
    Aborted,

    /// Any other transport failure (bad URL, body read error, TLS).
    #[error("Request failed: {0}")]
    Other(String),
}

impl HttpError {
    /// Whether the failure means the remote service could not be reached.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, HttpError::Connect(_) | HttpError::Timeout(_))
    }
}
