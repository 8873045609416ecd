//! Error types for the prefetch module.

use crate::http::HttpError;
use thiserror::Error;

/// A speculative fetch that did not buffer anything.
///
/// Misses are logged and counted, never surfaced to the user: the real
/// load path fetches the media again and handles its own errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrefetchMiss {
    /// The server answered, but not with the expected status.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The request did not complete.
    #[error("network error: {0}")]
    Network(#[from] HttpError),

    /// The prefetch task panicked or was torn down.
    #[error("prefetch task failed: {0}")]
    Task(String),
}
