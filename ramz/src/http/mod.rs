//! Async HTTP client abstraction.
//!
//! Every outbound request made by the crate (speculative media fetches and
//! lead submission) goes through [`AsyncHttpClient`], so the network can be
//! replaced by a mock in tests.
//!
//! ```ignore
//! use ramz::http::{AsyncHttpClient, ByteRange, ReqwestClient};
//!
//! let client = ReqwestClient::new()?;
//! let response = client
//!     .get_range("https://cdn.example.com/reel.mp4", ByteRange::new(0, 499_999))
//!     .await?;
//! assert!(response.is_partial_content());
//! ```

mod client;
mod types;

pub use client::{AsyncHttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use types::{ByteRange, HttpError, HttpResponse};

#[cfg(test)]
pub use client::tests::{MockHttpClient, RecordedRequest};
