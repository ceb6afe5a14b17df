//! User configuration and preferences

use crate::domain::buckets::{validate_sidecar_name, DEFAULT_SIDECAR_NAME};
use crate::error::{Result, SorterError};
use crate::preview::DEFAULT_MAX_HEIGHT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Images taller than this are scaled down for display
    pub max_display_height: u32,
    /// Name of the bucket file looked up in each opened folder
    pub sidecar_name: String,
    /// Refresh interval of the caps-lock label
    pub status_interval_ms: u64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            max_display_height: DEFAULT_MAX_HEIGHT,
            sidecar_name: DEFAULT_SIDECAR_NAME.to_string(),
            status_interval_ms: 500,
        }
    }
}

impl UserConfig {
    /// Get the config file path (~/.config/imgsort/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("imgsort").join("config.json"))
    }

    /// Load config from the default location, or defaults if it doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            SorterError::Config("Could not determine config directory".to_string())
        })?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| SorterError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| SorterError::Config(format!("Failed to parse config file: {}", e)))?;

        validate_sidecar_name(&config.sidecar_name)
            .map_err(|e| SorterError::Config(format!("Invalid sidecar_name: {}", e)))?;

        Ok(config)
    }

    /// Save config to the default location, returning the path written
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            SorterError::Config("Could not determine config directory".to_string())
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SorterError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SorterError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)
            .map_err(|e| SorterError::Config(format!("Failed to write config file: {}", e)))
    }
}
