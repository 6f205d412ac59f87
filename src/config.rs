//! Configuration management
//!
//! Config stored at: ~/.config/freight-recalc/config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::domain::service::rate_matcher::AmbiguousRatePolicy;
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default terminal output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// What to do with price lists that price a lane/category pair twice
    #[serde(default)]
    pub ambiguous_rates: AmbiguousRatePolicy,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("freight-recalc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load from disk, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Persist to disk, creating the config directory if needed
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::config_path()?, content)?;
        Ok(())
    }
}
