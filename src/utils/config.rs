//! Configuration management for PlayDeck
//!
//! This module handles loading and managing application configuration
//! from various sources including config files and environment variables.

use crate::player::PlayerConfig;
use crate::utils::error::{IntoDeckError, PlayDeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Controller configuration
    pub player: PlayerConfig,

    /// Control surface configuration
    pub surface: SurfaceConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Control surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Resolution of the console fill bars, in cells
    pub bar_cells: usize,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            surface: SurfaceConfig::default(),
            general: GeneralConfig::default(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { bar_cells: 20 }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. User config file (~/.config/playdeck/config.toml on Linux)
    /// 3. Environment variables (PLAYDECK_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Try to load user config
        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()
            .ok_or_else(|| PlayDeckError::Config("Cannot determine user config path".to_string()))?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).config_err("Failed to create config directory")?;
        }

        let toml = toml::to_string_pretty(self).config_err("Failed to serialize config")?;
        std::fs::write(path, toml).config_err("Failed to write config file")?;

        Ok(())
    }

    /// Merge configuration from a TOML file
    // TODO: merge field-by-field instead of full replacement
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path).config_err("Failed to read config file")?;

        let file_config: Config = toml::from_str(&contents).config_err("Failed to parse config file")?;
        *self = file_config;

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        // Example: PLAYDECK_DEFAULT_VOLUME=0.8
        if let Ok(volume) = std::env::var("PLAYDECK_DEFAULT_VOLUME") {
            self.player.default_volume = volume
                .parse()
                .map_err(|_| PlayDeckError::Config("Invalid PLAYDECK_DEFAULT_VOLUME".to_string()))?;
        }

        if let Ok(cells) = std::env::var("PLAYDECK_BAR_CELLS") {
            self.surface.bar_cells = cells
                .parse()
                .map_err(|_| PlayDeckError::Config("Invalid PLAYDECK_BAR_CELLS".to_string()))?;
        }

        if let Ok(log_level) = std::env::var("PLAYDECK_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        // Validate default volume
        if !(0.0..=1.0).contains(&self.player.default_volume) {
            return Err(PlayDeckError::Config(
                "Default volume must be between 0.0 and 1.0".to_string(),
            ));
        }

        // Validate speed presets
        if self.player.speed_presets.is_empty() {
            return Err(PlayDeckError::Config(
                "At least one speed preset is required".to_string(),
            ));
        }
        if self
            .player
            .speed_presets
            .iter()
            .any(|rate| !rate.is_finite() || *rate <= 0.0)
        {
            return Err(PlayDeckError::Config(
                "Speed presets must be positive numbers".to_string(),
            ));
        }

        // Validate bar resolution
        if self.surface.bar_cells == 0 {
            return Err(PlayDeckError::Config(
                "Console bar resolution must be non-zero".to_string(),
            ));
        }

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(PlayDeckError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get the user config file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("playdeck").join("config.toml"))
    }
}
