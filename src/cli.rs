//! CLI command implementations for merge2048.

pub(crate) mod console;
pub(crate) mod play;

mod output;

use clap::ValueEnum;
use merge2048::{GameConfig, SessionError};
use std::error::Error;
use std::fmt;

/// Output format for the end-of-game summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        Self::new(e.to_string())
    }
}

/// Build the game configuration from command-line values.
fn game_config(rows: u16, cols: u16, seed: Option<u64>) -> GameConfig {
    GameConfig { rows, cols, seed }
}
