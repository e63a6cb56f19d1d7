// SPDX-License-Identifier: MPL-2.0
//! Toast queue configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - Visible capacity, default auto-dismiss delay, screen position
//!
//! Missing keys fall back to the values in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, Config, ToastPosition};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.toasts.position = ToastPosition::BottomRight;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Screen corner or edge the toast stack is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// All positions, in reading order.
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    /// Returns true if the stack is anchored to the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            ToastPosition::TopLeft | ToastPosition::TopCenter | ToastPosition::TopRight
        )
    }

    /// Returns true if the stack is horizontally centered.
    #[must_use]
    pub fn is_centered(self) -> bool {
        matches!(self, ToastPosition::TopCenter | ToastPosition::BottomCenter)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Toast queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastsConfig {
    /// Maximum number of toasts shown at once. Clamped to
    /// `MIN_MAX_VISIBLE..=MAX_MAX_VISIBLE` when turned into settings.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    /// Auto-dismiss delay in milliseconds. `0` keeps toasts until dismissed.
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,

    /// Where the stack is anchored on screen.
    #[serde(default)]
    pub position: ToastPosition,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            default_duration_ms: DEFAULT_DURATION_MS,
            position: ToastPosition::default(),
        }
    }
}

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastsConfig,
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toasts: ToastsConfig {
                max_visible: 3,
                default_duration_ms: 1500,
                position: ToastPosition::BottomCenter,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toasts]\nposition = \"bottom-left\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.toasts.max_visible, DEFAULT_MAX_VISIBLE);
        assert_eq!(loaded.toasts.default_duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(loaded.toasts.position, ToastPosition::BottomLeft);
    }

    #[test]
    fn empty_file_yields_default_config() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toasts]\nmax_visible = \"many\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(base.clone()))
            .expect("save should create directories");
        assert!(base.join(CONFIG_FILE).exists());
    }

    #[test]
    fn position_serializes_kebab_case() {
        let config = Config {
            toasts: ToastsConfig {
                position: ToastPosition::TopCenter,
                ..ToastsConfig::default()
            },
        };
        let text = toml::to_string_pretty(&config).expect("serialize");
        assert!(text.contains("position = \"top-center\""));
    }

    #[test]
    fn position_edges() {
        let top: Vec<_> = ToastPosition::ALL.iter().filter(|p| p.is_top()).collect();
        assert_eq!(top.len(), 3);
        assert!(ToastPosition::default().is_top());
        assert!(!ToastPosition::BottomRight.is_top());
        assert!(ToastPosition::BottomCenter.is_centered());
        assert!(!ToastPosition::TopRight.is_centered());
    }
}
