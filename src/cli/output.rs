//! Output formatting utilities for CLI.

use super::{CliError, OutputFormat};
use merge2048::{EndReason, Session, SessionState};
use serde::Serialize;

/// JSON-serializable game summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameSummary {
    /// Random seed used for tile placement.
    pub(super) seed: u64,
    /// Grid rows.
    pub(super) rows: u16,
    /// Grid columns.
    pub(super) cols: u16,
    /// Moves applied.
    pub(super) moves: u32,
    /// Final score.
    pub(super) score: u64,
    /// Highest tile reached.
    pub(super) max_tile: u64,
    /// How the game ended.
    pub(super) end_reason: &'static str,
}

impl JsonGameSummary {
    /// Create from a session.
    pub(super) fn from_session(session: &Session) -> Self {
        Self {
            seed: session.seed(),
            rows: session.grid().rows(),
            cols: session.grid().cols(),
            moves: session.moves(),
            score: session.score(),
            max_tile: session.grid().max_tile(),
            end_reason: end_reason_label(session.state()),
        }
    }
}

fn end_reason_label(state: SessionState) -> &'static str {
    match state {
        SessionState::InProgress => "in progress",
        SessionState::Terminated(EndReason::Quit) => "quit",
        SessionState::Terminated(EndReason::BoardFull) => "board full",
    }
}

/// Format a finished game as human-readable text.
pub(super) fn format_text(session: &Session) -> String {
    let grid = session.grid();
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {})\n", session.seed()));
    output.push_str(&format!("  Board: {}x{}\n", grid.rows(), grid.cols()));
    output.push_str(&format!("  Ended: {}\n", end_reason_label(session.state())));
    output.push_str(&format!("  Moves: {}\n", session.moves()));
    output.push_str(&format!("  Highest tile: {}\n", grid.max_tile()));
    output.push_str(&format!("  Score: {}\n", session.score()));

    output
}

/// Print the end-of-game summary in the requested format.
pub(super) fn print_summary(session: &Session, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            print!("{}", format_text(session));
        }
        OutputFormat::Json => {
            let summary = JsonGameSummary::from_session(session);
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }
    Ok(())
}
