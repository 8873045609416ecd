//! Default values and constants for all configuration settings.
//!
//! Contains the `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;
use crate::asset::{DEFAULT_ASSUMED_BYTES_PER_SEC, DEFAULT_VIDEO_READY_SECS};
use crate::http::DEFAULT_TIMEOUT_SECS;
use crate::i18n::Language;
use crate::prefetch::{
    DEFAULT_CHUNK_BYTES, DEFAULT_CLICK_CHUNKS, DEFAULT_HOVER_CHUNKS, DEFAULT_LOOKAHEAD_SECS,
    DEFAULT_LOW_WATER_SECS,
};
use crate::visibility::{DEFAULT_ROOT_MARGIN_PX, DEFAULT_THRESHOLD};

/// Public site URL.
pub const DEFAULT_SITE_BASE_URL: &str = "https://alramz-agency.com";

/// Management system that receives contact leads.
pub const DEFAULT_MANAGEMENT_API_URL: &str = "https://el-ramzz.vercel.app";

/// Public placeholder key used when no real key is configured.
///
/// It ships with the site and is not a secret. Deployments must configure
/// their own key.
pub const PLACEHOLDER_API_KEY: &str = "ramzz-agency-secret-key-2024";

/// Default log file name.
pub const DEFAULT_LOG_FILE_NAME: &str = "ramz.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            site: SiteSettings {
                base_url: DEFAULT_SITE_BASE_URL.to_string(),
                language: Language::default(),
            },
            management: ManagementSettings {
                api_url: DEFAULT_MANAGEMENT_API_URL.to_string(),
                api_key: None,
            },
            http: HttpSettings {
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            prefetch: PrefetchSettings {
                chunk_bytes: DEFAULT_CHUNK_BYTES,
                hover_chunks: DEFAULT_HOVER_CHUNKS,
                click_chunks: DEFAULT_CLICK_CHUNKS,
                low_water_secs: DEFAULT_LOW_WATER_SECS,
                lookahead_secs: DEFAULT_LOOKAHEAD_SECS,
            },
            readiness: ReadinessSettings {
                video_ready_secs: DEFAULT_VIDEO_READY_SECS,
                assumed_bytes_per_sec: DEFAULT_ASSUMED_BYTES_PER_SEC,
            },
            visibility: VisibilitySettings {
                threshold: DEFAULT_THRESHOLD,
                root_margin_px: DEFAULT_ROOT_MARGIN_PX,
            },
            logging: LoggingSettings {
                file: config_directory().join("logs").join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
