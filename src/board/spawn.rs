//! Random tile placement.

use rand::Rng;
use rand::seq::index;

use crate::board::{Cell, Coord, Grid};

/// Value of every spawned tile.
pub const SPAWN_VALUE: u64 = 2;

/// Number of tiles placed on a fresh grid.
pub const INITIAL_TILES: usize = 2;

/// Place a new tile on a uniformly chosen empty cell.
///
/// Returns the filled coordinate, or `None` if the grid was already full,
/// in which case the grid is left unchanged.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Coord> {
    let empty = grid.empty_coords();
    if empty.is_empty() {
        return None;
    }

    let coord = empty[rng.gen_range(0..empty.len())];
    grid.set(coord, Cell::Occupied(SPAWN_VALUE));
    Some(coord)
}

/// Create an empty grid holding [`INITIAL_TILES`] tiles at distinct random cells.
///
/// Positions are sampled without replacement from all `rows * cols` cells.
/// Returns `None` if a dimension is zero or the grid has too few cells.
pub fn seeded_grid<R: Rng + ?Sized>(rows: u16, cols: u16, rng: &mut R) -> Option<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    let size = grid.cells().len();
    if size < INITIAL_TILES {
        return None;
    }

    let width = usize::from(cols);
    for idx in index::sample(rng, size, INITIAL_TILES) {
        let coord = Coord::new(u16::try_from(idx / width).ok()?, u16::try_from(idx % width).ok()?);
        grid.set(coord, Cell::Occupied(SPAWN_VALUE));
    }

    Some(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_fills_one_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::from_rows(&[[2, 0], [4, 8]]).unwrap();

        let coord = spawn_tile(&mut grid, &mut rng);
        assert_eq!(coord, Some(Coord::new(0, 1)));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(Cell::Occupied(2)));
        assert!(grid.is_full());
    }

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::from_rows(&[[2, 4], [4, 8]]).unwrap();
        let before = grid.clone();

        assert_eq!(spawn_tile(&mut grid, &mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spawn_reaches_every_empty_cell() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let mut grid = Grid::new(2, 2).unwrap();
            let coord = spawn_tile(&mut grid, &mut rng).unwrap();
            seen[usize::from(coord.row) * 2 + usize::from(coord.col)] = true;
        }

        assert!(seen.iter().all(|&s| s), "spawn never hit some cells: {seen:?}");
    }

    #[test]
    fn test_seeded_grid_has_two_distinct_twos() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = seeded_grid(4, 4, &mut rng).unwrap();
            assert_eq!(grid.occupied_count(), 2);
            assert_eq!(grid.score(), 4);
            assert!(grid.cells().iter().all(|c| c.is_empty() || *c == Cell::Occupied(2)));
        }
    }

    #[test]
    fn test_seeded_grid_smallest_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = seeded_grid(1, 2, &mut rng).unwrap();
        assert!(grid.is_full());
    }

    #[test]
    fn test_seeded_grid_rejects_tiny_boards() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(seeded_grid(1, 1, &mut rng).is_none());
        assert!(seeded_grid(0, 4, &mut rng).is_none());
    }
}
