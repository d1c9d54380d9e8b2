//! Application configuration loaded from an optional TOML file.
//!
//! Every field has a default, so an empty or partial file is valid and a
//! missing file means "play with the stock settings".

use std::path::Path;

use serde::{Deserialize, Serialize};

use nave_core::constants::SPAWN_SAFE_DISTANCE;
use nave_sim::SimConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "NAVE_CONFIG";

/// Config file used when `NAVE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "nave.toml";

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values that parse but cannot run a game
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub high_dpi: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "NAVE".to_string(),
            high_dpi: false,
        }
    }
}

/// Top-level config file layout: a `[window]` table and a `[sim]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub sim: SimConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject settings the engine cannot play with.
    ///
    /// Asteroids are placed by redrawing until they land far enough from the
    /// centre, so the canvas has to leave room outside that circle. Sides are
    /// whole pixels because the window is sized from them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = self.sim.canvas;
        for side in [canvas.width, canvas.height] {
            if !side.is_finite() || side.fract() != 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "canvas {}x{} must be a whole number of pixels",
                    canvas.width, canvas.height
                )));
            }
        }
        let min_side = 2.0 * SPAWN_SAFE_DISTANCE;
        if !(canvas.width > min_side && canvas.height > min_side) {
            return Err(ConfigError::Invalid(format!(
                "canvas {}x{} must be larger than {min_side} on both sides",
                canvas.width, canvas.height
            )));
        }
        if self.sim.starting_lives == 0 {
            return Err(ConfigError::Invalid(
                "starting_lives must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Path of the config file: `$NAVE_CONFIG`, or `nave.toml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Load `path`, falling back to defaults when it is missing or unusable.
pub fn load_or_default(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();
    match AppConfig::load_from_file(path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no config at {}, using defaults", path.display());
            AppConfig::default()
        }
        Err(e) => {
            log::warn!("ignoring config {}: {e}", path.display());
            AppConfig::default()
        }
    }
}
