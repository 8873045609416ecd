//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name, with validation via the Specification Pattern.
//! The INI parser goes through the same keys, so a value accepted by
//! `ramz config set` is exactly a value accepted in `config.ini`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use super::settings::ConfigFile;
use crate::i18n::Language;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Site settings
    SiteBaseUrl,
    SiteLanguage,

    // Management settings
    ManagementApiUrl,
    ManagementApiKey,

    // HTTP settings
    HttpTimeoutSecs,

    // Prefetch settings
    PrefetchChunkBytes,
    PrefetchHoverChunks,
    PrefetchClickChunks,
    PrefetchLowWaterSecs,
    PrefetchLookaheadSecs,

    // Readiness settings
    ReadinessVideoReadySecs,
    ReadinessAssumedBytesPerSec,

    // Visibility settings
    VisibilityThreshold,
    VisibilityRootMarginPx,

    // Logging settings
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "management.api_url").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::SiteBaseUrl => "site.base_url",
            ConfigKey::SiteLanguage => "site.language",
            ConfigKey::ManagementApiUrl => "management.api_url",
            ConfigKey::ManagementApiKey => "management.api_key",
            ConfigKey::HttpTimeoutSecs => "http.timeout_secs",
            ConfigKey::PrefetchChunkBytes => "prefetch.chunk_bytes",
            ConfigKey::PrefetchHoverChunks => "prefetch.hover_chunks",
            ConfigKey::PrefetchClickChunks => "prefetch.click_chunks",
            ConfigKey::PrefetchLowWaterSecs => "prefetch.low_water_secs",
            ConfigKey::PrefetchLookaheadSecs => "prefetch.lookahead_secs",
            ConfigKey::ReadinessVideoReadySecs => "readiness.video_ready_secs",
            ConfigKey::ReadinessAssumedBytesPerSec => "readiness.assumed_bytes_per_sec",
            ConfigKey::VisibilityThreshold => "visibility.threshold",
            ConfigKey::VisibilityRootMarginPx => "visibility.root_margin_px",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "management").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "api_url").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Whether `config list` should mask the value.
    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigKey::ManagementApiKey)
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::SiteBaseUrl => config.site.base_url.clone(),
            ConfigKey::SiteLanguage => config.site.language.to_string(),
            ConfigKey::ManagementApiUrl => config.management.api_url.clone(),
            ConfigKey::ManagementApiKey => config.management.api_key.clone().unwrap_or_default(),
            ConfigKey::HttpTimeoutSecs => config.http.timeout_secs.to_string(),
            ConfigKey::PrefetchChunkBytes => config.prefetch.chunk_bytes.to_string(),
            ConfigKey::PrefetchHoverChunks => config.prefetch.hover_chunks.to_string(),
            ConfigKey::PrefetchClickChunks => config.prefetch.click_chunks.to_string(),
            ConfigKey::PrefetchLowWaterSecs => config.prefetch.low_water_secs.to_string(),
            ConfigKey::PrefetchLookaheadSecs => config.prefetch.lookahead_secs.to_string(),
            ConfigKey::ReadinessVideoReadySecs => config.readiness.video_ready_secs.to_string(),
            ConfigKey::ReadinessAssumedBytesPerSec => {
                config.readiness.assumed_bytes_per_sec.to_string()
            }
            ConfigKey::VisibilityThreshold => config.visibility.threshold.to_string(),
            ConfigKey::VisibilityRootMarginPx => config.visibility.root_margin_px.to_string(),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before setting.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        let value = value.trim();

        match self {
            ConfigKey::SiteBaseUrl => config.site.base_url = trim_url(value),
            ConfigKey::SiteLanguage => config.site.language = self.parse::<Language>(value)?,
            ConfigKey::ManagementApiUrl => config.management.api_url = trim_url(value),
            ConfigKey::ManagementApiKey => config.management.api_key = optional_string(value),
            ConfigKey::HttpTimeoutSecs => config.http.timeout_secs = self.parse(value)?,
            ConfigKey::PrefetchChunkBytes => config.prefetch.chunk_bytes = self.parse(value)?,
            ConfigKey::PrefetchHoverChunks => config.prefetch.hover_chunks = self.parse(value)?,
            ConfigKey::PrefetchClickChunks => config.prefetch.click_chunks = self.parse(value)?,
            ConfigKey::PrefetchLowWaterSecs => {
                config.prefetch.low_water_secs = self.parse(value)?
            }
            ConfigKey::PrefetchLookaheadSecs => {
                config.prefetch.lookahead_secs = self.parse(value)?
            }
            ConfigKey::ReadinessVideoReadySecs => {
                config.readiness.video_ready_secs = self.parse(value)?
            }
            ConfigKey::ReadinessAssumedBytesPerSec => {
                config.readiness.assumed_bytes_per_sec = self.parse(value)?
            }
            ConfigKey::VisibilityThreshold => config.visibility.threshold = self.parse(value)?,
            ConfigKey::VisibilityRootMarginPx => {
                config.visibility.root_margin_px = self.parse(value)?
            }
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value),
        }
        Ok(())
    }

    fn parse<T: FromStr>(&self, value: &str) -> Result<T, ConfigKeyError> {
        value.parse().map_err(|_| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason: format!("could not parse '{}'", value),
        })
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value.trim())
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::SiteBaseUrl => Box::new(UrlSpec),
            ConfigKey::SiteLanguage => Box::new(OneOfSpec::new(&["ar", "en"])),
            ConfigKey::ManagementApiUrl => Box::new(UrlSpec),
            ConfigKey::ManagementApiKey => Box::new(AnyStringSpec),
            ConfigKey::HttpTimeoutSecs => Box::new(PositiveIntegerSpec),
            ConfigKey::PrefetchChunkBytes => Box::new(PositiveIntegerSpec),
            ConfigKey::PrefetchHoverChunks => Box::new(PositiveIntegerSpec),
            ConfigKey::PrefetchClickChunks => Box::new(PositiveIntegerSpec),
            ConfigKey::PrefetchLowWaterSecs => Box::new(PositiveNumberSpec),
            ConfigKey::PrefetchLookaheadSecs => Box::new(PositiveNumberSpec),
            ConfigKey::ReadinessVideoReadySecs => Box::new(PositiveNumberSpec),
            ConfigKey::ReadinessAssumedBytesPerSec => Box::new(PositiveNumberSpec),
            ConfigKey::VisibilityThreshold => Box::new(RatioSpec),
            ConfigKey::VisibilityRootMarginPx => Box::new(NonNegativeNumberSpec),
            ConfigKey::LoggingFile => Box::new(PathSpec),
        }
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::SiteBaseUrl,
            ConfigKey::SiteLanguage,
            ConfigKey::ManagementApiUrl,
            ConfigKey::ManagementApiKey,
            ConfigKey::HttpTimeoutSecs,
            ConfigKey::PrefetchChunkBytes,
            ConfigKey::PrefetchHoverChunks,
            ConfigKey::PrefetchClickChunks,
            ConfigKey::PrefetchLowWaterSecs,
            ConfigKey::PrefetchLookaheadSecs,
            ConfigKey::ReadinessVideoReadySecs,
            ConfigKey::ReadinessAssumedBytesPerSec,
            ConfigKey::VisibilityThreshold,
            ConfigKey::VisibilityRootMarginPx,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications (Specification Pattern)
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Check if the value satisfies this specification.
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Specification that accepts any string value.
struct AnyStringSpec;

impl ValueSpecification for AnyStringSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Specification that requires the value to be one of a set of options.
struct OneOfSpec {
    options: &'static [&'static str],
}

impl OneOfSpec {
    fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }
}

impl ValueSpecification for OneOfSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let lower = value.to_lowercase();
        if self.options.iter().any(|opt| *opt == lower) {
            Ok(())
        } else {
            Err(format!("must be one of: {}", self.options.join(", ")))
        }
    }
}

/// Specification for positive integer values.
struct PositiveIntegerSpec;

impl ValueSpecification for PositiveIntegerSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<u64>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err("must be a positive integer".to_string()),
        }
    }
}

/// Specification for strictly positive numbers.
struct PositiveNumberSpec;

impl ValueSpecification for PositiveNumberSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
            _ => Err("must be a positive number".to_string()),
        }
    }
}

/// Specification for numbers that may be zero.
struct NonNegativeNumberSpec;

impl ValueSpecification for NonNegativeNumberSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
            _ => Err("must be zero or a positive number".to_string()),
        }
    }
}

/// Specification for a ratio between 0 and 1.
struct RatioSpec;

impl ValueSpecification for RatioSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<f64>() {
            Ok(n) if (0.0..=1.0).contains(&n) => Ok(()),
            _ => Err("must be a number between 0.0 and 1.0".to_string()),
        }
    }
}

/// Specification for URL values.
struct UrlSpec;

impl ValueSpecification for UrlSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err("must be a URL starting with 'http://' or 'https://'".to_string())
        }
    }
}

/// Specification for path values (non-empty).
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Convert path to display string, collapsing home dir to ~.
pub(super) fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Convert empty string to None, non-empty to Some.
fn optional_string(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Base URLs are joined with paths, so a trailing slash is dropped.
fn trim_url(value: &str) -> String {
    value.trim_end_matches('/').to_string()
}
