//! # Configuration
//!
//! Settings for the dispatch system, read from TOML with environment
//! overrides. Every field has a default, so an empty file is a valid config.
//!
//! ```toml
//! spreadsheet_name = "database"
//! channel_capacity = 32
//! log_filter = "info"
//! ```
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `SHEET_DISPATCH_SPREADSHEET` | `spreadsheet_name` |
//! | `SHEET_DISPATCH_CHANNEL_CAPACITY` | `channel_capacity` |
//! | `SHEET_DISPATCH_LOG` | `log_filter` |

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const ENV_SPREADSHEET: &str = "SHEET_DISPATCH_SPREADSHEET";
pub const ENV_CHANNEL_CAPACITY: &str = "SHEET_DISPATCH_CHANNEL_CAPACITY";
pub const ENV_LOG: &str = "SHEET_DISPATCH_LOG";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spreadsheet file (without extension) that acts as the database.
    pub spreadsheet_name: String,
    /// Capacity of the dispatch request channel.
    pub channel_capacity: usize,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_name: "database".to_string(),
            channel_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, then applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&text)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_SPREADSHEET) {
            self.spreadsheet_name = name;
        }
        if let Some(raw) = lookup(ENV_CHANNEL_CAPACITY) {
            self.channel_capacity = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                key: ENV_CHANNEL_CAPACITY,
                reason: format!("{raw:?}: {e}"),
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "channel_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.spreadsheet_name.is_empty() {
            return Err(ConfigError::Invalid {
                key: "spreadsheet_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
