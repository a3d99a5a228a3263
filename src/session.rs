//! Game session controller.
//!
//! A [`Session`] owns the grid for one game and sequences each turn:
//! slide and merge, spawn a tile, then check whether the grid is full.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Coord, Direction, Grid, apply_move, assert_invariants, seeded_grid, spawn_tile};
use crate::command::Command;
use crate::config::GameConfig;
use crate::error::{SessionError, SessionResult};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player quit.
    Quit,
    /// No empty cell remained after a turn.
    BoardFull,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Moves are accepted.
    InProgress,
    /// The game is over. Absorbing.
    Terminated(EndReason),
}

/// What a single accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether sliding and merging changed the grid.
    pub changed: bool,
    /// Number of merges performed by the slide.
    pub merges: usize,
    /// Where the new tile was placed, `None` if the grid was full.
    pub spawned: Option<Coord>,
    /// Session state after the turn.
    pub state: SessionState,
}

/// One game in progress.
#[derive(Debug, Clone)]
pub struct Session {
    /// The board.
    grid: Grid,
    /// Lifecycle state.
    state: SessionState,
    /// Number of moves applied.
    moves: u32,
    /// Seed the spawn RNG was created from.
    seed: u64,
    /// Spawn RNG.
    rng: StdRng,
}

impl Session {
    /// Start a new game with a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidDimensions`] if a dimension is zero or
    /// the grid has fewer than two cells.
    pub fn new(rows: u16, cols: u16) -> SessionResult<Self> {
        Self::with_seed(rows, cols, rand::random())
    }

    /// Start a new game whose tile placement is fully determined by `seed`.
    ///
    /// ```
    /// use merge2048::Session;
    ///
    /// let session = Session::with_seed(4, 4, 42).unwrap();
    /// assert_eq!(session.score(), 4);
    /// assert_eq!(session.grid().occupied_count(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidDimensions`] if a dimension is zero or
    /// the grid has fewer than two cells.
    pub fn with_seed(rows: u16, cols: u16, seed: u64) -> SessionResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = seeded_grid(rows, cols, &mut rng)
            .ok_or(SessionError::InvalidDimensions { rows, cols })?;

        info!("New {rows}x{cols} session with seed {seed}");

        Ok(Self {
            grid,
            state: SessionState::InProgress,
            moves: 0,
            seed,
            rng,
        })
    }

    /// Start a new game from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidDimensions`] for unusable dimensions.
    pub fn from_config(config: &GameConfig) -> SessionResult<Self> {
        match config.seed {
            Some(seed) => Self::with_seed(config.rows, config.cols, seed),
            None => Self::new(config.rows, config.cols),
        }
    }

    /// Resume play on an existing grid.
    ///
    /// A full grid starts out terminated.
    #[must_use]
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        let state = if grid.is_full() {
            SessionState::Terminated(EndReason::BoardFull)
        } else {
            SessionState::InProgress
        };

        Self {
            grid,
            state,
            moves: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Read-only view of the board.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, SessionState::Terminated(_))
    }

    /// Number of moves applied so far.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Seed of the spawn RNG.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Current score: the sum of all tiles on the board.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.grid.score()
    }

    /// Play one turn: slide in `direction`, spawn a tile, check for a full grid.
    ///
    /// A tile is spawned even when the slide changed nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Terminated`] if the game is already over.
    /// The grid is left untouched in that case.
    pub fn apply_player_move(&mut self, direction: Direction) -> SessionResult<MoveOutcome> {
        if self.is_terminated() {
            warn!("Rejected {direction} move on a terminated session");
            return Err(SessionError::Terminated);
        }

        let moved = apply_move(&self.grid, direction);
        let changed = moved != self.grid;
        let merges = self.grid.occupied_count() - moved.occupied_count();
        self.grid = moved;

        let spawned = spawn_tile(&mut self.grid, &mut self.rng);
        self.moves = self.moves.saturating_add(1);
        assert_invariants(&self.grid);

        if self.grid.is_full() {
            self.state = SessionState::Terminated(EndReason::BoardFull);
            info!(
                "Board full after {} moves, final score {}",
                self.moves,
                self.score()
            );
        }

        debug!(
            "Move {}: {direction}, changed={changed}, merges={merges}, spawned={spawned:?}",
            self.moves
        );

        Ok(MoveOutcome {
            changed,
            merges,
            spawned,
            state: self.state,
        })
    }

    /// End the game without applying a move. Does nothing if already over.
    pub fn quit(&mut self) {
        if !self.is_terminated() {
            self.state = SessionState::Terminated(EndReason::Quit);
            info!("Player quit after {} moves with score {}", self.moves, self.score());
        }
    }

    /// Dispatch a parsed command.
    ///
    /// Returns the move outcome for moves and `None` for quit.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Terminated`] for a move on a finished game.
    pub fn apply_command(&mut self, command: Command) -> SessionResult<Option<MoveOutcome>> {
        match command {
            Command::Move(direction) => self.apply_player_move(direction).map(Some),
            Command::Quit => {
                self.quit();
                Ok(None)
            }
        }
    }
}
