//! Engine configuration.

use crate::search::SearchStrategy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the move engine and the binary around it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Search algorithm used to pick moves.
    #[serde(default)]
    strategy: SearchStrategy,

    /// Tracing filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl EngineConfig {
    /// Creates a configuration using the given strategy and default logging.
    #[instrument]
    pub fn new(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            log_filter: default_log_filter(),
        }
    }

    /// Returns this configuration with the strategy replaced.
    #[instrument(skip(self))]
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;

        info!(strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(SearchStrategy::default())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
