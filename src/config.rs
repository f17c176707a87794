//! Solver configuration loaded from TOML.
//!
//! ```toml
//! first_player = "first"
//! log_filter = "info,strictly_negamax=debug"
//!
//! [first]
//! name = "Ada"
//! kind = "human"
//!
//! [second]
//! name = "Engine"
//! kind = "ai"
//! ```

use crate::games::tictactoe::Player;
use crate::host::{PlayerKind, Roster, Seat};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session and the binary around it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Player who opens every game.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Seat for the first player (X).
    #[serde(default = "default_first_seat")]
    first: Seat,

    /// Seat for the second player (O).
    #[serde(default = "default_second_seat")]
    second: Seat,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_first_player() -> Player {
    Player::First
}

#[instrument]
fn default_first_seat() -> Seat {
    Seat::new("Player X".to_string(), PlayerKind::Human)
}

#[instrument]
fn default_second_seat() -> Seat {
    Seat::new("Player O".to_string(), PlayerKind::Ai)
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            first_player: default_first_player(),
            first: default_first_seat(),
            second: default_second_seat(),
            log_filter: default_log_filter(),
        }
    }
}

impl SolverConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Player registry built from the two seats.
    pub fn roster(&self) -> Roster {
        Roster::new(self.first.clone(), self.second.clone())
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
