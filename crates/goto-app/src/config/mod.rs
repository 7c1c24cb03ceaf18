//! Configuration file parsing for the goto dialog
//!
//! Supports `<config_dir>/goto-dialog/config.toml` or an explicit path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, load_settings_strict};
pub use types::*;
