//! Configuration file loading for the queens CLI.
//!
//! Settings come from a TOML file (`queens.toml` unless `--config` is given).
//! A missing file means all defaults; command-line flags override individual
//! values.

use crate::output::Format;
use queens_core::Markers;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Queen and empty markers must differ or the grid is unreadable.
    #[error("Queen and empty markers are both '{0}'")]
    IndistinctMarkers(char),
}

/// Main CLI configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct QueensConfig {
    /// Largest board the CLI searches without `--force`.
    /// The solver has no limit of its own. Defaults to 14.
    #[serde(default = "default_max_board_size")]
    pub max_board_size: usize,
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub default_format: Format,
    /// Abort searches that run longer than this many milliseconds.
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
    /// Characters used to draw boards.
    #[serde(default)]
    pub markers: Markers,
}

fn default_max_board_size() -> usize {
    14
}

impl Default for QueensConfig {
    fn default() -> Self {
        QueensConfig {
            max_board_size: default_max_board_size(),
            default_format: Format::default(),
            time_limit_ms: None,
            markers: Markers::default(),
        }
    }
}

impl QueensConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if the file contains invalid TOML, or
    /// [`ConfigError::IndistinctMarkers`] if both markers are the same.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: QueensConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the path to the configuration file.
    ///
    /// Currently returns `queens.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("queens.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.markers.is_distinct() {
            return Err(ConfigError::IndistinctMarkers(self.markers.queen));
        }
        Ok(())
    }
}
