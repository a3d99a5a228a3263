#![no_main]

//! Move sequence fuzzer.
//!
//! Builds an arbitrary grid and drives it through a sequence of moves and
//! spawns, checking after every step that:
//! 1. No move changes the score or adds tiles
//! 2. Spawns add exactly one 2 unless the grid is full
//! 3. Every tile stays a power of two within the cap

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use merge2048::board::{
    Cell, Direction, Grid, MAX_TILE_EXPONENT, apply_move, check_invariants, spawn_tile,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A fuzzer-generated direction.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzDirection {
    Up,
    Left,
    Down,
    Right,
}

impl From<FuzzDirection> for Direction {
    fn from(d: FuzzDirection) -> Self {
        match d {
            FuzzDirection::Up => Direction::Up,
            FuzzDirection::Left => Direction::Left,
            FuzzDirection::Down => Direction::Down,
            FuzzDirection::Right => Direction::Right,
        }
    }
}

/// Structured input for move fuzzing.
#[derive(Arbitrary, Debug)]
struct MoveInput {
    /// Grid rows, reduced to 1..=8.
    rows: u8,
    /// Grid columns, reduced to 1..=8.
    cols: u8,
    /// Tile exponents; 0 marks an empty cell.
    exponents: Vec<u8>,
    /// Moves to apply.
    moves: Vec<FuzzDirection>,
    /// RNG seed for spawns.
    rng_seed: u64,
}

fuzz_target!(|input: MoveInput| {
    let rows = u16::from(input.rows % 8) + 1;
    let cols = u16::from(input.cols % 8) + 1;

    let Some(mut grid) = Grid::new(rows, cols) else {
        return;
    };

    let coords: Vec<_> = grid.iter().map(|(coord, _)| coord).collect();
    for (coord, exp) in coords.into_iter().zip(input.exponents.iter()) {
        let exp = u32::from(exp % 40);
        if exp > 0 {
            let accepted = grid.set(coord, Cell::Occupied(1u64 << exp));
            assert_eq!(accepted, exp <= MAX_TILE_EXPONENT, "set accepted 2^{exp}");
        }
    }

    let mut rng = StdRng::seed_from_u64(input.rng_seed);

    for d in input.moves.into_iter().take(64) {
        let before = grid.clone();
        grid = apply_move(&grid, d.into());

        assert_eq!(grid.score(), before.score(), "move changed score");
        assert!(grid.occupied_count() <= before.occupied_count(), "move added tiles");

        let occupied = grid.occupied_count();
        let full = grid.is_full();
        let spawned = spawn_tile(&mut grid, &mut rng);
        assert_eq!(spawned.is_none(), full);
        if !full {
            assert_eq!(grid.occupied_count(), occupied + 1);
        }

        let violations = check_invariants(&grid);
        assert!(violations.is_empty(), "{violations:?}");
    }
});
