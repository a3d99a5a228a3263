// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! merge2048: the sliding-tile merge game on a fixed-size grid.
//!
//! This crate provides:
//! - A board engine (`board`): slide and merge in four directions, tile
//!   spawning, fullness and score queries
//! - A session controller (`session`) that owns the grid across turns
//! - Command parsing for console input (`command`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Shell (TUI / console)           │
//! ├─────────────────────────────────────┤
//! │     Session Controller              │
//! ├─────────────────────────────────────┤
//! │     Board Engine                    │
//! └─────────────────────────────────────┘
//! ```
//!
//! Quick start:
//! ```
//! use merge2048::{Direction, Session};
//!
//! let mut session = Session::with_seed(4, 4, 42).unwrap();
//! let outcome = session.apply_player_move(Direction::Left).unwrap();
//! assert!(outcome.spawned.is_some());
//! println!("{}", session.grid());
//! ```

pub mod board;
pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use error::{ParseCommandError, SessionError, SessionResult};

// Re-export key types at crate root for convenience
pub use board::{Cell, Coord, Direction, Grid};
pub use command::Command;
pub use config::GameConfig;
pub use session::{EndReason, MoveOutcome, Session, SessionState};
