// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_caption::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.caption_opacity = Some(0.8);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCaption";

/// Default translucency of the caption background.
pub const DEFAULT_CAPTION_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Caption background opacity in `[0, 1]`.
    pub caption_opacity: Option<f32>,
    /// Y-coordinate the caption slides to while it is being edited, so the
    /// on-screen keyboard (or edit chrome) does not cover it.
    #[serde(default)]
    pub keyboard_anchor: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            caption_opacity: Some(DEFAULT_CAPTION_OPACITY),
            keyboard_anchor: None,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

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
    fn default_config_has_standard_opacity() {
        let config = Config::default();
        assert_eq!(config.caption_opacity, Some(DEFAULT_CAPTION_OPACITY));
        assert_eq!(config.keyboard_anchor, None);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            caption_opacity: Some(0.75),
            keyboard_anchor: Some(120.0),
        };
        save_to_path(&config, &path).expect("save config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.caption_opacity, Some(0.75));
        assert_eq!(loaded.keyboard_anchor, Some(120.0));
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("does_not_exist.toml");
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "caption_opacity = \"not a number\"").expect("write file");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.caption_opacity, Some(DEFAULT_CAPTION_OPACITY));
    }

    #[test]
    fn missing_keyboard_anchor_deserializes_as_none() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "caption_opacity = 0.4").expect("write file");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.caption_opacity, Some(0.4));
        assert_eq!(loaded.keyboard_anchor, None);
    }
}
