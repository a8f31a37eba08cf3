//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_rules::{BoardSize, DEFAULT_TURN_SECONDS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seconds each player has to move before the turn passes.
    #[serde(default = "default_turn_seconds")]
    turn_seconds: u32,

    /// Board size to open directly, skipping the menu.
    #[serde(default)]
    default_size: Option<BoardSize>,

    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_turn_seconds() -> u32 {
    DEFAULT_TURN_SECONDS
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            turn_seconds: default_turn_seconds(),
            default_size: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            turn_seconds = config.turn_seconds,
            default_size = ?config.default_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<BoardSize>,
        turn_seconds: Option<u32>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            debug!(%size, "Overriding board size");
            self.default_size = Some(size);
        }
        if let Some(seconds) = turn_seconds {
            debug!(seconds, "Overriding turn length");
            self.turn_seconds = seconds;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_seconds == 0 {
            return Err(ConfigError::new(
                "turn_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
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
