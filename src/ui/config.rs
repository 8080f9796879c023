//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/folio/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. It holds the selected theme, the two UI
//! timings and the clipboard backend. Every field has a default, so an empty
//! object (or a missing file) is a valid configuration.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/folio/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::clipboard::ClipboardBackend;

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// How long the boot splash stays up, in milliseconds.
    #[serde(default = "default_boot_delay_ms")]
    pub boot_delay_ms: u64,

    /// How long "Copied!" stays on the copy button, in milliseconds.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    #[serde(default)]
    pub clipboard: ClipboardBackend,
}

fn default_theme_name() -> String {
    "Sky".to_string()
}

fn default_boot_delay_ms() -> u64 {
    900
}

fn default_copy_feedback_ms() -> u64 {
    1_500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            boot_delay_ms: default_boot_delay_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
            clipboard: ClipboardBackend::default(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Rewrite only the `theme` field of the file at `path`. The other fields
    /// keep their on-disk values.
    pub fn save_theme(path: &Path, theme: &str) -> Result<()> {
        let mut stored = Self::load_from(path)?;
        stored.theme = theme.to_string();
        stored.save_to(path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.boot_delay_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// The per-user config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        Self::config_path().ok()
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "folio")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Sky");
        assert_eq!(config.boot_delay(), Duration::from_millis(900));
        assert_eq!(config.copy_feedback(), Duration::from_millis(1_500));
        assert_eq!(config.clipboard, ClipboardBackend::Auto);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme": "Nord", "clipboard": "osc52"}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.theme, "Nord");
        assert_eq!(config.clipboard, ClipboardBackend::Osc52);
        assert_eq!(config.boot_delay_ms, 900);
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("subdir").join("config.json");

        let config = Config {
            theme: "Dracula".to_string(),
            boot_delay_ms: 0,
            copy_feedback_ms: 750,
            clipboard: ClipboardBackend::System,
        };

        config.save_to(&config_path).expect("save_to");
        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_theme_keeps_other_fields() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");

        let stored = Config {
            copy_feedback_ms: 750,
            clipboard: ClipboardBackend::System,
            ..Config::default()
        };
        stored.save_to(&config_path).expect("save_to");

        Config::save_theme(&config_path, "Nord").expect("save_theme");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(
            loaded,
            Config {
                theme: "Nord".to_string(),
                ..stored
            }
        );
    }

    #[test]
    fn test_save_theme_without_file_starts_from_defaults() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("folio").join("config.json");

        Config::save_theme(&config_path, "Dracula").expect("save_theme");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, "Dracula");
        assert_eq!(loaded.boot_delay_ms, 900);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_from_invalid_json_reports_path() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").expect("write");

        let err = Config::load_from(&config_path).expect_err("invalid json");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Nord", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }
}
