//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[model]
; Directory holding the LITHO1.0 registry and node<N>.model files
; Overridden by the LITHOQUERY_MODEL_DIR environment variable and --model-dir
directory = {}
; Registry file name inside the model directory
registry = {}
; Tessellation subdivision level (1-7). The shipped registry is level 7.
level = {}

[query]
; Emit only the lithosphere, crust, sediment, ice and water layers
shallow = {}

[logging]
; Log file path, truncated on every run
file = {}
"#,
        path_to_string(&config.model.directory),
        config.model.registry,
        config.model.level,
        config.query.shallow,
        path_to_string(&config.logging.file),
    )
}

/// Format a path for the config file, abbreviating the home directory as `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
