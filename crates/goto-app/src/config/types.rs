//! Configuration types for the goto dialog
//!
//! Defines:
//! - `Settings` - Global settings loaded from `config.toml`
//! - Section sub-types

use serde::{Deserialize, Serialize};

use crate::surface::SurfaceConfig;

/// Native activity opened for `openAndroidActivity`
pub const DEFAULT_ACTIVITY: &str = "Goto";

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub surface: SurfaceConfig,

    #[serde(default)]
    pub platform: PlatformSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Platform integration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlatformSettings {
    /// Activity name passed to the host when the surface asks for it
    #[serde(default = "default_activity")]
    pub activity: String,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            activity: default_activity(),
        }
    }
}

fn default_activity() -> String {
    DEFAULT_ACTIVITY.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Trace every inbound message at debug level
    #[serde(default)]
    pub trace_messages: bool,
}
