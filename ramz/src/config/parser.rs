//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! Values are applied through [`ConfigKey::set`], so the file and the
//! `config set` command share one set of validation rules.

use ini::Ini;
use tracing::warn;

use super::file::ConfigFileError;
use super::keys::{ConfigKey, ConfigKeyError};
use super::settings::ConfigFile;

/// Sections the parser knows about.
const KNOWN_SECTIONS: &[&str] = &[
    "site",
    "management",
    "http",
    "prefetch",
    "readiness",
    "visibility",
    "logging",
];

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
/// Unknown sections and keys are logged and skipped.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    for (section_name, section) in ini.iter() {
        let Some(section_name) = section_name else {
            continue;
        };
        if !KNOWN_SECTIONS.contains(&section_name) {
            warn!(section = section_name, "Ignoring unknown config section");
            continue;
        }

        for (key, value) in section.iter() {
            let full_name = format!("{}.{}", section_name, key);
            let config_key = match full_name.parse::<ConfigKey>() {
                Ok(config_key) => config_key,
                Err(_) => {
                    warn!(key = %full_name, "Ignoring unknown config key");
                    continue;
                }
            };

            // Empty values keep the default, except where empty means "unset".
            if value.trim().is_empty() && config_key != ConfigKey::ManagementApiKey {
                continue;
            }

            config_key
                .set(&mut config, value)
                .map_err(|e| invalid_value(section_name, key, value, e))?;
        }
    }

    Ok(config)
}

fn invalid_value(section: &str, key: &str, value: &str, error: ConfigKeyError) -> ConfigFileError {
    let reason = match error {
        ConfigKeyError::ValidationFailed { reason, .. } => reason,
        other => other.to_string(),
    };
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason,
    }
}
