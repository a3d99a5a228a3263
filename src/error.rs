//! Error types for the game engine and session controller.

use std::fmt;

/// Errors raised by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The requested grid cannot host a game.
    ///
    /// Both dimensions must be non-zero and the grid must have room for the
    /// two starting tiles.
    InvalidDimensions {
        /// Requested number of rows.
        rows: u16,
        /// Requested number of columns.
        cols: u16,
    },
    /// A move was submitted after the session had already terminated.
    Terminated,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}: need at least two cells")
            }
            SessionError::Terminated => write!(f, "session has terminated, no further moves accepted"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Error returned when an input token is not a move or quit command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCommandError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized command {:?}: expected one of W, A, S, D or Q", self.input)
    }
}

impl std::error::Error for ParseCommandError {}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
