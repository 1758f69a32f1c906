//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and the exit code.

use std::fmt;
use std::process;

use lithoquery::config::{ConfigFileError, MODEL_DIR_ENV};
use lithoquery::query::QueryError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Query failed
    Query(QueryError),
    /// Invalid command-line input
    InvalidInput(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let Some(hint) = self.hint() {
            eprintln!();
            eprintln!("{}", hint);
        }

        process::exit(1)
    }

    /// Additional help printed after the error message.
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::Query(QueryError::SourceUnavailable(_)) => Some(format!(
                "Make sure the LITHO1.0 model files are installed.\n\
                 The model directory is taken from --model-dir, then {}, \
                 then [model] directory in the config file.",
                MODEL_DIR_ENV
            )),
            CliError::Query(QueryError::CorruptModel(_)) => Some(
                "The node model files are incomplete. Reinstall the LITHO1.0 model.".to_string(),
            ),
            CliError::Config(_) => {
                Some("Run 'lithoquery config path' to locate the config file.".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Query(e) => write!(f, "Query failed: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Query(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::Coord(_) | QueryError::InvalidLevel(_) => {
                CliError::InvalidInput(e.to_string())
            }
            other => CliError::Query(other),
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}
