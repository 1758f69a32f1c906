//! Default values for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::source::DEFAULT_REGISTRY_FILE;
use crate::tessellation::DEFAULT_LEVEL;

/// Environment variable overriding the model directory.
pub const MODEL_DIR_ENV: &str = "LITHOQUERY_MODEL_DIR";

/// Model directory name under the home directory.
pub const DEFAULT_MODEL_DIR_NAME: &str = "LITHO1.0";

pub const DEFAULT_LOG_FILE_NAME: &str = "lithoquery.log";

/// Default model directory (~/LITHO1.0).
pub fn default_model_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_MODEL_DIR_NAME)
}

/// Default log file (~/.lithoquery/lithoquery.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            model: ModelSettings {
                directory: default_model_directory(),
                registry: DEFAULT_REGISTRY_FILE.to_string(),
                level: DEFAULT_LEVEL,
            },
            query: QuerySettings { shallow: false },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
