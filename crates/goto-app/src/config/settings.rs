//! Settings parser for config.toml

use super::types::Settings;
use goto_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "goto-dialog";

const DEFAULT_CONFIG_CONTENT: &str = r#"# Goto Dialog Configuration

[surface]
# Content the host loads into the dialog surface
content = "AddressBarDialog.qml"
# Whether the surface is created visible
initial_visible = false

[platform]
# Native activity opened when the dialog requests it
activity = "Goto"

[behavior]
# Log every inbound surface message at debug level
trace_messages = false
"#;

/// Default location: `<config_dir>/goto-dialog/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Strict variant of [`load_settings`] for explicitly requested files
pub fn load_settings_strict(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }
    let content = std::fs::read_to_string(config_path)?;
    Ok(toml::from_str(&content)?)
}

/// Write a commented default config file if none exists.
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG_CONTENT)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
