//! Application configuration persisted between runs.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::Hsv;

/// Application-wide configuration, stored as JSON in the user config dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Window dimensions and mode
    #[serde(default)]
    pub window: WindowConfig,
    /// Last selected colour as an HSV triple
    #[serde(default = "random_colour")]
    pub colour: [f64; 3],
}

fn random_colour() -> [f64; 3] {
    Hsv::random().to_array()
}

impl AppConfig {
    /// Load configuration from disk.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the configuration file path.
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("io", "github", "hueboard")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// The saved colour, replaced by a random triple when the stored
    /// value is out of range or not finite.
    pub fn colour(&self) -> Hsv {
        if self
            .colour
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
        {
            Hsv::from_array(self.colour)
        } else {
            Hsv::random()
        }
    }

    pub fn set_colour(&mut self, colour: Hsv) {
        self.colour = colour.to_array();
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            window: WindowConfig::default(),
            colour: random_colour(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    /// Start in fullscreen mode
    #[serde(default)]
    pub fullscreen_enabled: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            fullscreen_enabled: false,
        }
    }
}
