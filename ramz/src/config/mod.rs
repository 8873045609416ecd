//! User configuration.
//!
//! Settings live in `~/.ramz/config.ini`. Loading starts from built-in
//! defaults and overlays whatever the file sets; deployment values can then
//! be overridden from the environment:
//!
//! | Variable             | Key                  |
//! |----------------------|----------------------|
//! | `SITE_BASE_URL`      | `site.base_url`      |
//! | `MANAGEMENT_API_URL` | `management.api_url` |
//! | `MANAGEMENT_API_KEY` | `management.api_key` |
//!
//! # Example
//!
//! ```no_run
//! use ramz::config::ConfigFile;
//!
//! let config = ConfigFile::load()?.with_env_overrides()?;
//! let policy = config.readiness_policy();
//! # Ok::<(), ramz::config::ConfigFileError>(())
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_LOG_FILE_NAME, DEFAULT_MANAGEMENT_API_URL, DEFAULT_SITE_BASE_URL, PLACEHOLDER_API_KEY,
};
pub use file::{
    config_directory, config_file_path, ConfigFileError, ENV_MANAGEMENT_API_KEY,
    ENV_MANAGEMENT_API_URL, ENV_SITE_BASE_URL,
};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    ConfigFile, HttpSettings, LoggingSettings, ManagementSettings, PrefetchSettings,
    ReadinessSettings, SiteSettings, VisibilitySettings,
};
