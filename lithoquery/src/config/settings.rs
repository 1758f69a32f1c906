//! Settings structs for each configuration section.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Model location settings
    pub model: ModelSettings,
    /// Query defaults
    pub query: QuerySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Where the earth model lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    /// Directory holding the registry and node model files
    pub directory: PathBuf,
    /// Registry file name inside `directory`
    pub registry: String,
    /// Tessellation subdivision level (1-7)
    pub level: u8,
}

/// Query defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySettings {
    /// Emit only the shallow layers in profile mode
    pub shallow: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
