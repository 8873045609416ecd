//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization and client
//! creation so command handlers start from a ready environment.

use crate::error::CliError;
use ramz::asset::AssetLoadTracker;
use ramz::config::ConfigFile;
use ramz::http::ReqwestClient;
use ramz::i18n::{Language, LanguageContext};
use ramz::logging::{init_logging_at, LoggingGuard};
use std::sync::Arc;
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration, with environment overrides applied
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new() -> Result<Self, CliError> {
        let config = ConfigFile::load()?.with_env_overrides()?;

        let logging_guard = init_logging_at(&config.logging.file)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        info!(version = ramz::VERSION, "ramz CLI starting");

        Ok(Self {
            logging_guard,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// HTTP client using the configured timeout.
    pub fn http_client(&self) -> Result<Arc<ReqwestClient>, CliError> {
        let client = ReqwestClient::with_timeout(self.config.http.timeout_secs)?;
        Ok(Arc::new(client))
    }

    /// Tracker using the configured readiness policy.
    pub fn tracker(&self) -> Arc<AssetLoadTracker> {
        Arc::new(AssetLoadTracker::new(self.config.readiness_policy()))
    }

    /// Language context, defaulting to the configured site language.
    pub fn language(&self, language: Option<Language>) -> LanguageContext {
        LanguageContext::new(language.unwrap_or(self.config.site.language))
    }
}
