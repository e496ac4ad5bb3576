//! Configuration for the terminal driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct NoughtsConfig {
    /// Pause before each computer move, in milliseconds (0 disables).
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Mark the computer plays.
    #[serde(default = "default_computer")]
    computer: Player,
}

fn default_ai_delay_ms() -> u64 {
    500
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_computer() -> Player {
    Player::O
}

impl Default for NoughtsConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: default_ai_delay_ms(),
            log_filter: default_log_filter(),
            computer: default_computer(),
        }
    }
}

impl NoughtsConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(ai_delay_ms = config.ai_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the computer's delay.
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: u64) -> Self {
        self.ai_delay_ms = ai_delay_ms;
        self
    }

    /// Overrides the computer's mark.
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
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
