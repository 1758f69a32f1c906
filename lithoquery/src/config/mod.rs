//! User configuration for lithoquery.
//!
//! Settings are read from `~/.lithoquery/config.ini`. A missing file yields
//! the defaults; the CLI overlays its own flags on top.
//!
//! # Example
//!
//! ```
//! use lithoquery::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.model.level, 7);
//! assert!(!config.query.shallow);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_log_file, default_model_directory, DEFAULT_LOG_FILE_NAME, DEFAULT_MODEL_DIR_NAME,
    MODEL_DIR_ENV,
};
pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use parser::expand_tilde;
pub use settings::{LoggingSettings, ModelSettings, QuerySettings};
