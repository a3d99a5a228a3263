//! Grid invariants - sanity checks that detect engine bugs.
//!
//! Spawning only ever inserts 2, merging doubles equal values below the cap,
//! and every public constructor and [`Grid::set`] reject invalid tiles, so
//! these should never trigger.

use crate::board::{Grid, MAX_TILE_VALUE, is_tile_value};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all grid invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(grid: &Grid) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let expected = usize::from(grid.rows()) * usize::from(grid.cols());
    if grid.cells().len() != expected {
        violations.push(InvariantViolation {
            message: format!(
                "Grid {}x{} holds {} cells, expected {expected}",
                grid.rows(),
                grid.cols(),
                grid.cells().len()
            ),
        });
    }

    let tiles = grid
        .iter()
        .filter_map(|(coord, cell)| cell.value().map(|value| (coord, value)));
    for (coord, value) in tiles {
        if !is_tile_value(value) {
            violations.push(InvariantViolation {
                message: format!("Cell at {coord} holds {value}, not a power of two in 2..={MAX_TILE_VALUE}"),
            });
        }
    }

    violations
}

/// Assert all grid invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(grid: &Grid) {
    let violations = check_invariants(grid);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Grid invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_grid: &Grid) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Coord};

    #[test]
    fn test_valid_grid_passes() {
        let grid = Grid::from_rows(&[[2, 4, 0, 2048]]).unwrap();
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_empty_grid_passes() {
        let grid = Grid::new(4, 4).unwrap();
        assert!(check_invariants(&grid).is_empty());
    }

    #[test]
    fn test_non_power_of_two_detected() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_unchecked(Coord::new(1, 3), Cell::Occupied(6));

        let violations = check_invariants(&grid);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("(1, 3)"));
        assert!(violations[0].message.contains("holds 6,"));
    }

    #[test]
    fn test_value_one_detected() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_unchecked(Coord::new(0, 0), Cell::Occupied(1));
        assert_eq!(check_invariants(&grid).len(), 1);
    }

    #[test]
    fn test_zero_tile_detected() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_unchecked(Coord::new(0, 0), Cell::Occupied(0));
        assert_eq!(check_invariants(&grid).len(), 1);
    }

    #[test]
    fn test_tile_above_cap_detected() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.set_unchecked(Coord::new(0, 1), Cell::Occupied(MAX_TILE_VALUE * 2));
        assert_eq!(check_invariants(&grid).len(), 1);
    }

    #[test]
    fn test_multiple_violations_all_reported() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_unchecked(Coord::new(0, 0), Cell::Occupied(3));
        grid.set_unchecked(Coord::new(1, 1), Cell::Occupied(12));

        let violations = check_invariants(&grid);
        assert_eq!(violations.len(), 2, "{violations:?}");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Grid invariant violations")]
    fn test_assert_invariants_panics() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_unchecked(Coord::new(0, 0), Cell::Occupied(5));
        assert_invariants(&grid);
    }
}
