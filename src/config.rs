//! User configuration (~/.swatchbook/config.json).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default UI scale
pub const DEFAULT_UI_SCALE: f32 = 1.0;

/// UI scale bounds; values outside are clamped
pub const MIN_UI_SCALE: f32 = 0.5;
pub const MAX_UI_SCALE: f32 = 4.0;

fn default_palette_dirs() -> Vec<String> {
    vec!["~/.swatchbook/palettes".to_string()]
}

fn default_ui_scale() -> f32 {
    DEFAULT_UI_SCALE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directories scanned for palette files
    #[serde(default = "default_palette_dirs", rename = "paletteDirs")]
    pub palette_dirs: Vec<String>,
    /// UI scale factor (1.0 = 100%)
    #[serde(default = "default_ui_scale", rename = "uiScale")]
    pub ui_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            palette_dirs: default_palette_dirs(),
            ui_scale: DEFAULT_UI_SCALE,
        }
    }
}

impl Config {
    /// Effective UI scale, clamped to a sane range
    pub fn ui_scale(&self) -> f32 {
        self.ui_scale.clamp(MIN_UI_SCALE, MAX_UI_SCALE)
    }

    /// Palette directories with `~` expanded
    pub fn expanded_palette_dirs(&self) -> Vec<PathBuf> {
        self.palette_dirs
            .iter()
            .map(|d| PathBuf::from(shellexpand::tilde(d).as_ref()))
            .collect()
    }
}

/// Path to the config file (~/.swatchbook/config.json)
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".swatchbook").join("config.json"))
        .unwrap_or_else(|| std::env::temp_dir().join("swatchbook-config.json"))
}

/// Load the config file, falling back to defaults if missing or malformed.
pub fn load_config() -> Config {
    let path = config_path();
    match std::fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str::<Config>(&contents) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed config, using defaults");
                Config::default()
            }
        },
        Err(_) => {
            info!(path = %path.display(), "No config file, using defaults");
            Config::default()
        }
    }
}
