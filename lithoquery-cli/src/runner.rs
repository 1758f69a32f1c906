//! Setup shared by the model commands: config, logging and the query engine.

use std::path::{Path, PathBuf};

use crate::commands::common::ModelArgs;
use crate::error::CliError;
use lithoquery::config::ConfigFile;
use lithoquery::logging::{default_log_file, init_logging, LoggingGuard};
use lithoquery::query::QueryEngine;
use lithoquery::source::DirectoryModelSource;
use lithoquery::tessellation::SubdivisionLevel;
use tracing::info;

/// Holds the loaded config and keeps logging alive for one command.
pub struct CliRunner {
    /// Flushes the log file on drop
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load the config file and start logging to its log file and stderr.
    ///
    /// `debug_mode` switches the default filter from `warn` to `debug`;
    /// RUST_LOG still takes precedence.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, true, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn log_startup(&self, command: &str) {
        info!(version = lithoquery::VERSION, command, "lithoquery starting");
    }

    /// Resolve the subdivision level from flags and config.
    pub fn level(&self, args: &ModelArgs) -> Result<SubdivisionLevel, CliError> {
        let level = args.level.unwrap_or(self.config.model.level);
        SubdivisionLevel::new(level).map_err(|e| CliError::InvalidInput(e.to_string()))
    }

    /// Create a query engine over the resolved model directory.
    pub fn engine(&self, args: &ModelArgs) -> QueryEngine<DirectoryModelSource> {
        let directory = args.resolve_model_dir(&self.config);
        info!(directory = %directory.display(), "Using model directory");
        QueryEngine::new(
            DirectoryModelSource::new(directory).with_registry_file(&self.config.model.registry),
        )
    }
}

/// Directory and file name of the configured log path.
fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| default_log_file().to_string());
    (dir, file)
}
