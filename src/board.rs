//! Board engine.
//!
//! Pure operations on a [`Grid`]:
//! - Sliding and merging tiles in one of four directions
//! - Spawning new tiles on random empty cells
//! - Fullness and score queries
//! - Invariant checks for debug builds

mod grid;
mod invariants;
mod moves;
mod spawn;

pub use grid::{Cell, Coord, Grid, MAX_TILE_EXPONENT, MAX_TILE_VALUE, is_tile_value};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use moves::{Direction, apply_move, slide_line};
pub use spawn::{INITIAL_TILES, SPAWN_VALUE, seeded_grid, spawn_tile};

/// Check whether no empty cell remains on `grid`.
#[must_use]
pub fn is_full(grid: &Grid) -> bool {
    grid.is_full()
}

/// Sum of all tile values on `grid`.
#[must_use]
pub fn score(grid: &Grid) -> u64 {
    grid.score()
}
