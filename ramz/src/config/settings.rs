//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use crate::i18n::Language;
use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub site: SiteSettings,
    /// Lead forwarding to the management system
    pub management: ManagementSettings,
    pub http: HttpSettings,
    /// Speculative prefetch sizing
    pub prefetch: PrefetchSettings,
    /// When buffered video counts as ready
    pub readiness: ReadinessSettings,
    /// Lazy-load trigger geometry
    pub visibility: VisibilitySettings,
    pub logging: LoggingSettings,
}

/// Public site settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    /// Canonical base URL of the site
    pub base_url: String,
    /// Language shown to first-time visitors
    pub language: Language,
}

/// Management API settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagementSettings {
    /// Base URL; leads go to `{api_url}/api/clients/submit`
    pub api_url: String,
    /// API key sent as `x-api-key`. `None` falls back to the public placeholder.
    pub api_key: Option<String>,
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Prefetch settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefetchSettings {
    /// Bytes per range request
    pub chunk_bytes: u64,
    /// Chunks fetched on hover or touch
    pub hover_chunks: usize,
    /// Chunks fetched on click
    pub click_chunks: usize,
    /// Buffered seconds below which playback tops up
    pub low_water_secs: f64,
    /// How far past the playhead a top-up aims
    pub lookahead_secs: f64,
}

/// Readiness settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessSettings {
    pub video_ready_secs: f64,
    /// Bitrate assumed when a video's size or duration is unknown
    pub assumed_bytes_per_sec: f64,
}

/// Visibility settings.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilitySettings {
    /// Visible ratio that triggers loading
    pub threshold: f64,
    /// Look-ahead margin around the viewport in pixels
    pub root_margin_px: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
