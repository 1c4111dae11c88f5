//! Engine configuration.

use crate::games::tictactoe::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Configuration for a match.
///
/// ```toml
/// size = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board side length (N for an N×N board).
    #[serde(default = "default_size")]
    size: usize,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

impl EngineConfig {
    /// Creates a configuration for the given board size.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Returns a copy with the board size replaced.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Checks that the board size is supported.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            Ok(())
        } else {
            warn!("Board size out of range");
            Err(ConfigError::new(format!(
                "Board size {} is outside the supported range {}..={}",
                self.size, MIN_SIZE, MAX_SIZE
            )))
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
