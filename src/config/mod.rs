// SPDX-License-Identifier: MPL-2.0
//! This module handles the controller's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gesture]` - Initial mute shadow and the opt-in behaviour switches
//!
//! Thresholds and step sizes are not configurable; they live in [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`
//! 3. Set `ICED_SCRUB_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_scrub::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.gesture.symmetric_touch = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedScrub";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SCRUB_CONFIG_DIR";

/// Gesture behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Whether the controller's mute shadow starts set.
    #[serde(
        default = "default_start_muted",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_muted: Option<bool>,

    /// Give touch input the same press/hold/tap semantics as the mouse.
    #[serde(default = "default_off", skip_serializing_if = "Option::is_none")]
    pub symmetric_touch: Option<bool>,

    /// Clamp drag scrubbing to `[0, duration]` instead of leaving it to the surface.
    #[serde(default = "default_off", skip_serializing_if = "Option::is_none")]
    pub clamp_drag_seek: Option<bool>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            start_muted: default_start_muted(),
            symmetric_touch: default_off(),
            clamp_drag_seek: default_off(),
        }
    }
}

/// Controller configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gesture: GestureConfig,
}

fn default_start_muted() -> Option<bool> {
    Some(DEFAULT_START_MUTED)
}

fn default_off() -> Option<bool> {
    Some(false)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, preferring the explicit override, then the
/// environment variable, then the platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {}", path.display(), err);
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_starts_muted_and_asymmetric() {
        let config = Config::default();
        assert_eq!(config.gesture.start_muted, Some(true));
        assert_eq!(config.gesture.symmetric_touch, Some(false));
        assert_eq!(config.gesture.clamp_drag_seek, Some(false));
    }

    #[test]
    fn save_and_load_round_trip_preserves_gesture_section() {
        let config = Config {
            gesture: GestureConfig {
                start_muted: Some(false),
                symmetric_touch: Some(true),
                clamp_drag_seek: Some(true),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gesture]\nsymmetric_touch = true\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.gesture.start_muted, Some(true));
        assert_eq!(loaded.gesture.symmetric_touch, Some(true));
        assert_eq!(loaded.gesture.clamp_drag_seek, Some(false));
    }

    #[test]
    fn empty_file_matches_default_config() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gesture\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn load_with_override_returns_default_when_file_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep").join("path");
        save_with_override(&Config::default(), Some(dir.clone())).expect("save should succeed");
        assert!(dir.join(CONFIG_FILE).exists());
    }
}
