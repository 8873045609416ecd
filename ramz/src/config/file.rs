//! Configuration file handling for ~/.ramz/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::defaults::PLACEHOLDER_API_KEY;
use super::keys::ConfigKey;
use super::settings::{ConfigFile, ManagementSettings};
use crate::asset::ReadinessPolicy;
use crate::prefetch::PrefetchConfig;
use crate::visibility::ObserveOptions;

/// Environment variable overriding `site.base_url`.
pub const ENV_SITE_BASE_URL: &str = "SITE_BASE_URL";
/// Environment variable overriding `management.api_url`.
pub const ENV_MANAGEMENT_API_URL: &str = "MANAGEMENT_API_URL";
/// Environment variable overriding `management.api_key`.
pub const ENV_MANAGEMENT_API_KEY: &str = "MANAGEMENT_API_KEY";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.ramz/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.ramz/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }

    /// Applies `SITE_BASE_URL`, `MANAGEMENT_API_URL` and
    /// `MANAGEMENT_API_KEY` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigFileError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// Empty values are ignored. Invalid values are errors, same as in the
    /// file.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigFileError> {
        let overrides = [
            (ENV_SITE_BASE_URL, ConfigKey::SiteBaseUrl),
            (ENV_MANAGEMENT_API_URL, ConfigKey::ManagementApiUrl),
            (ENV_MANAGEMENT_API_KEY, ConfigKey::ManagementApiKey),
        ];

        for (variable, key) in overrides {
            let Some(value) = lookup(variable).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            key.set(&mut self, &value)
                .map_err(|e| ConfigFileError::InvalidValue {
                    section: "env".to_string(),
                    key: variable.to_string(),
                    value: if key.is_secret() {
                        "***".to_string()
                    } else {
                        value.clone()
                    },
                    reason: e.to_string(),
                })?;
            debug!(variable, key = key.name(), "Applied environment override");
        }

        Ok(self)
    }

    /// Readiness policy built from `[readiness]`.
    pub fn readiness_policy(&self) -> ReadinessPolicy {
        ReadinessPolicy {
            video_ready_secs: self.readiness.video_ready_secs,
            assumed_bytes_per_sec: self.readiness.assumed_bytes_per_sec,
        }
    }

    /// Prefetch tuning built from `[prefetch]`.
    pub fn prefetch_config(&self) -> PrefetchConfig {
        PrefetchConfig {
            chunk_bytes: self.prefetch.chunk_bytes,
            hover_chunks: self.prefetch.hover_chunks,
            click_chunks: self.prefetch.click_chunks,
            low_water_secs: self.prefetch.low_water_secs,
            lookahead_secs: self.prefetch.lookahead_secs,
        }
    }

    /// Observation options built from `[visibility]`.
    pub fn observe_options(&self) -> ObserveOptions {
        ObserveOptions {
            threshold: self.visibility.threshold,
            root_margin_px: self.visibility.root_margin_px,
        }
    }
}

impl ManagementSettings {
    /// The configured API key, or the public placeholder.
    ///
    /// Falling back logs a warning every time: the placeholder is fine for
    /// local development but must not reach production.
    pub fn effective_api_key(&self) -> &str {
        match self.api_key.as_deref() {
            Some(key) => key,
            None => {
                warn!(
                    "No management API key configured, using the public placeholder; \
                     set management.api_key or {}",
                    ENV_MANAGEMENT_API_KEY
                );
                PLACEHOLDER_API_KEY
            }
        }
    }

    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key.is_none()
    }
}

/// Get the path to the config directory (~/.ramz).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ramz")
}

/// Get the path to the config file (~/.ramz/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
