//! Argument groups and helpers shared across CLI commands.

use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

use lithoquery::config::{expand_tilde, ConfigFile, MODEL_DIR_ENV};
use lithoquery::coord::GeoPoint;

use crate::error::CliError;

/// Query location.
#[derive(Debug, Clone, Args)]
pub struct LocationArgs {
    /// Latitude in decimal degrees (-90 to 90)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees (-180 to 180)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

impl LocationArgs {
    pub fn point(&self) -> Result<GeoPoint, CliError> {
        GeoPoint::validated(self.lat, self.lon).map_err(|e| CliError::InvalidInput(e.to_string()))
    }
}

/// Model selection flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ModelArgs {
    /// Directory holding the registry and node model files
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Tessellation subdivision level (1-7, default from config)
    #[arg(long)]
    pub level: Option<u8>,
}

impl ModelArgs {
    /// Model directory: flag, then environment, then config.
    pub fn resolve_model_dir(&self, config: &ConfigFile) -> PathBuf {
        resolve_model_dir(
            self.model_dir.clone(),
            std::env::var_os(MODEL_DIR_ENV),
            config,
        )
    }
}

/// Apply model directory precedence.
pub fn resolve_model_dir(
    flag: Option<PathBuf>,
    env: Option<OsString>,
    config: &ConfigFile,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    match env {
        Some(value) if !value.is_empty() => match value.to_str() {
            Some(text) => expand_tilde(text),
            None => PathBuf::from(value),
        },
        _ => config.model.directory.clone(),
    }
}
