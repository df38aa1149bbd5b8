//! Configuration file loading for the terminal game.
//!
//! Settings come from `chess-rules.toml` in the working directory unless
//! another path is given on the command line.

use rules_core::Layout;
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
}

/// Settings for a terminal game session.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Starting position in layout notation.
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print a piece's legal destinations when it is selected.
    #[serde(default = "default_show_legal_moves")]
    pub show_legal_moves: bool,
}

fn default_layout() -> String {
    Layout::STANDARD.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_legal_moves() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            layout: default_layout(),
            log_level: default_log_level(),
            show_legal_moves: default_show_legal_moves(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from `path`, or from [`Self::default_path()`].
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map_or_else(Self::default_path, Path::to_path_buf);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration path, `chess-rules.toml`.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-rules.toml")
    }
}
