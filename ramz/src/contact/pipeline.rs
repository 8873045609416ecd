//! Lead submission to the management API.

use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::error::SubmissionError;
use super::lead::ContactLead;
use super::validation::validate;
use crate::config::ManagementSettings;
use crate::http::AsyncHttpClient;

/// Path of the lead intake endpoint, relative to the API base URL.
pub const SUBMIT_PATH: &str = "/api/clients/submit";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// An accepted lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub status: u16,
    /// Server-provided acknowledgement, if it sent one.
    pub message: Option<String>,
}

/// Optional `{"message": "..."}` body sent on success and failure alike.
#[derive(Debug, Deserialize)]
struct ServerReply {
    message: Option<String>,
}

fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ServerReply>(body)
        .ok()
        .and_then(|reply| reply.message)
        .filter(|m| !m.trim().is_empty())
}

/// Submission counters.
#[derive(Debug, Default)]
pub struct SubmissionStats {
    accepted: AtomicU64,
    rejected: AtomicU64,
    invalid: AtomicU64,
    unreachable: AtomicU64,
}

/// Point-in-time copy of [`SubmissionStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionStatsSnapshot {
    pub accepted: u64,
    pub rejected: u64,
    pub invalid: u64,
    pub unreachable: u64,
}

impl SubmissionStats {
    pub fn snapshot(&self) -> SubmissionStatsSnapshot {
        SubmissionStatsSnapshot {
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
            unreachable: self.unreachable.load(Ordering::Relaxed),
        }
    }

    fn record(&self, result: &Result<Confirmation, SubmissionError>) {
        let counter = match result {
            Ok(_) => &self.accepted,
            Err(SubmissionError::Remote { .. }) => &self.rejected,
            Err(SubmissionError::Validation(_)) | Err(SubmissionError::Encoding(_)) => {
                &self.invalid
            }
            Err(SubmissionError::Connectivity(_)) => &self.unreachable,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Validates leads and posts them to the management API.
///
/// One lead, one POST: there is no retry, and every failure is returned to
/// the caller exactly once.
pub struct ContactSubmissionPipeline<C> {
    client: Arc<C>,
    endpoint: String,
    api_key: String,
    stats: SubmissionStats,
}

impl<C: AsyncHttpClient> ContactSubmissionPipeline<C> {
    /// Creates a pipeline posting to `{api_url}/api/clients/submit`.
    pub fn new(client: Arc<C>, api_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", api_url.trim_end_matches('/'), SUBMIT_PATH),
            api_key: api_key.into(),
            stats: SubmissionStats::default(),
        }
    }

    /// Creates a pipeline from the `[management]` settings.
    ///
    /// Uses the placeholder key, with a warning, when none is configured.
    pub fn from_settings(client: Arc<C>, settings: &ManagementSettings) -> Self {
        Self::new(client, &settings.api_url, settings.effective_api_key())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn stats(&self) -> SubmissionStatsSnapshot {
        self.stats.snapshot()
    }

    /// Validates `lead` and, if it passes, sends it.
    ///
    /// # Errors
    ///
    /// * [`SubmissionError::Validation`] - local checks failed, no request made
    /// * [`SubmissionError::Connectivity`] - the request never got an answer
    /// * [`SubmissionError::Remote`] - the service answered non-2xx
    pub async fn submit(&self, lead: &ContactLead) -> Result<Confirmation, SubmissionError> {
        let result = self.try_submit(lead).await;
        self.stats.record(&result);
        result
    }

    async fn try_submit(&self, lead: &ContactLead) -> Result<Confirmation, SubmissionError> {
        if let Err(errors) = validate(lead) {
            debug!(fields = %errors, "Contact lead failed validation");
            return Err(errors.into());
        }

        let body = serde_json::to_string(&lead.payload())?;
        let headers = [(API_KEY_HEADER, self.api_key.as_str())];

        let response = match self.client.post_json(&self.endpoint, &headers, &body).await {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "Lead submission could not reach service");
                return Err(e.into());
            }
        };

        let message = server_message(&response.body);
        if !response.is_success() {
            warn!(
                endpoint = %self.endpoint,
                status = response.status,
                message = message.as_deref().unwrap_or(""),
                "Lead submission rejected"
            );
            return Err(SubmissionError::Remote {
                status: response.status,
                message,
            });
        }

        info!(
            service = %lead.service_category,
            status = response.status,
            "Lead submitted"
        );
        Ok(Confirmation {
            status: response.status,
            message,
        })
    }
}
