//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::tessellation::{MAX_LEVEL, MIN_LEVEL};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [model] section
    if let Some(section) = ini.section(Some("model")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.model.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("registry") {
            let v = v.trim();
            if v.is_empty() || v.contains(['/', '\\']) {
                return Err(ConfigFileError::InvalidValue {
                    section: "model".to_string(),
                    key: "registry".to_string(),
                    value: v.to_string(),
                    reason: "must be a file name inside the model directory".to_string(),
                });
            }
            config.model.registry = v.to_string();
        }
        if let Some(v) = section.get("level") {
            config.model.level = v
                .trim()
                .parse()
                .ok()
                .filter(|level| (MIN_LEVEL..=MAX_LEVEL).contains(level))
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "model".to_string(),
                    key: "level".to_string(),
                    value: v.to_string(),
                    reason: format!("must be an integer between {} and {}", MIN_LEVEL, MAX_LEVEL),
                })?;
        }
    }

    // [query] section
    if let Some(section) = ini.section(Some("query")) {
        if let Some(v) = section.get("shallow") {
            config.query.shallow = parse_bool(v).ok_or_else(|| ConfigFileError::InvalidValue {
                section: "query".to_string(),
                key: "shallow".to_string(),
                value: v.to_string(),
                reason: "must be true or false".to_string(),
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Expand ~ to home directory in paths.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
