//! Game configuration.

/// Default number of grid rows.
pub const DEFAULT_ROWS: u16 = 4;

/// Default number of grid columns.
pub const DEFAULT_COLS: u16 = 4;

/// Configuration for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of grid rows (default: 4).
    pub rows: u16,
    /// Number of grid columns (default: 4).
    pub cols: u16,
    /// Seed for tile placement. `None` picks one at random.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
        }
    }
}
