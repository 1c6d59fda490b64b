use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::style::PanelStyle;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub ui: UiConfig,
    pub panel: PanelStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub font_family: String, // empty = built-in bitmap font
    pub font_size_pt: u32,
    pub bitmap_scale: i32,
    pub landmark_radius: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            name: "Debug Window".to_string(),
            width: 640,
            height: 480,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_family: String::new(),
            font_size_pt: 20,
            bitmap_scale: 3,
            landmark_radius: 3,
        }
    }
}

impl AppConfig {
    pub const PATH: &'static str = "config.json";

    pub fn load() -> Result<Self> {
        Self::load_from(Self::PATH)
    }

    /// Missing fields take their defaults; an unparsable file is replaced by
    /// defaults. The result is written back either way.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            match serde_json::from_str::<AppConfig>(&content) {
                Ok(c) => {
                    info!("Loaded configuration from {}", path.display());
                    c
                }
                Err(e) => {
                    warn!("Error parsing config: {}. Loading defaults.", e);
                    Self::default()
                }
            }
        } else {
            info!("Configuration file not found. Creating default at {}", path.display());
            Self::default()
        };

        config.save_to(path)?;

        Ok(config)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "window": { "name": "Arm" }, "panel": { "padding": 8 } }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.window.name, "Arm");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.panel.padding, 8);
        assert_eq!(config.panel.line_height, 26);
        assert_eq!(config.ui, UiConfig::default());

        // written back with every field present
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("\"line_height\": 26"));
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
