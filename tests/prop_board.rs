//! Property-based tests for the board engine.
//!
//! These tests verify sliding, merging, spawning and the grid queries
//! over arbitrary grids of up to 6x6.
//! Run with: cargo test --release prop_board

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use merge2048::board::{
    Cell, Direction, Grid, MAX_TILE_EXPONENT, SPAWN_VALUE, apply_move, check_invariants,
    slide_line, spawn_tile,
};

/// A cell value: empty (0) or a tile between 2 and 2048.
fn cell_value() -> impl Strategy<Value = u64> {
    prop_oneof![
        2 => Just(0u64),
        3 => (1u32..=11).prop_map(|exp| 1u64 << exp),
    ]
}

/// A grid with random dimensions and contents.
fn grid() -> impl Strategy<Value = Grid> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(cell_value(), rows * cols).prop_map(move |values| {
            let rows: Vec<Vec<u64>> = values.chunks(cols).map(<[u64]>::to_vec).collect();
            Grid::from_rows(&rows).unwrap()
        })
    })
}

/// A grid with no empty cells.
fn full_grid() -> impl Strategy<Value = Grid> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        prop::collection::vec((1u32..=11).prop_map(|exp| 1u64 << exp), rows * cols).prop_map(
            move |values| {
                let rows: Vec<Vec<u64>> = values.chunks(cols).map(<[u64]>::to_vec).collect();
                Grid::from_rows(&rows).unwrap()
            },
        )
    })
}

/// A grid whose tiles sit just below and at the largest allowed value.
fn grid_near_cap() -> impl Strategy<Value = Grid> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        let value = prop_oneof![
            1 => Just(0u64),
            3 => (MAX_TILE_EXPONENT - 2..=MAX_TILE_EXPONENT).prop_map(|exp| 1u64 << exp),
        ];
        prop::collection::vec(value, rows * cols).prop_map(move |values| {
            let rows: Vec<Vec<u64>> = values.chunks(cols).map(<[u64]>::to_vec).collect();
            Grid::from_rows(&rows).unwrap()
        })
    })
}

/// The grid with every row reversed.
fn mirrored(g: &Grid) -> Grid {
    let rows: Vec<Vec<u64>> = g
        .to_rows()
        .into_iter()
        .map(|mut row| {
            row.reverse();
            row
        })
        .collect();
    Grid::from_rows(&rows).unwrap()
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Left),
        Just(Direction::Down),
        Just(Direction::Right),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Merging replaces two equal tiles by their sum, so the score never changes.
    #[test]
    fn prop_move_preserves_score(g in grid(), d in direction()) {
        prop_assert_eq!(apply_move(&g, d).score(), g.score());
    }

    /// A move never creates tiles.
    #[test]
    fn prop_move_never_adds_tiles(g in grid(), d in direction()) {
        prop_assert!(apply_move(&g, d).occupied_count() <= g.occupied_count());
    }

    /// Moves keep dimensions and only ever produce valid tile values.
    #[test]
    fn prop_move_keeps_invariants(g in grid(), d in direction()) {
        let moved = apply_move(&g, d);
        prop_assert_eq!(moved.rows(), g.rows());
        prop_assert_eq!(moved.cols(), g.cols());
        prop_assert!(check_invariants(&moved).is_empty());
    }

    /// Once packed, tiles only move again if a merge happens.
    #[test]
    fn prop_repeat_move_without_merge_is_identity(g in grid(), d in direction()) {
        let once = apply_move(&g, d);
        let twice = apply_move(&once, d);
        if twice.occupied_count() == once.occupied_count() {
            prop_assert_eq!(twice, once);
        } else {
            prop_assert!(twice.occupied_count() < once.occupied_count());
        }
    }

    /// After a left move every row is packed against column 0.
    #[test]
    fn prop_left_move_packs_rows(g in grid()) {
        let moved = apply_move(&g, Direction::Left);
        for r in 0..moved.rows() {
            let row = moved.row(r).unwrap();
            let first_empty = row.iter().position(|c| c.is_empty()).unwrap_or(row.len());
            prop_assert!(row[first_empty..].iter().all(|c| c.is_empty()));
        }
    }

    /// Vertical moves are horizontal moves on the transposed grid.
    #[test]
    fn prop_up_is_transposed_left(g in grid()) {
        let up = apply_move(&g, Direction::Up);
        let via_left = apply_move(&g.transposed(), Direction::Left).transposed();
        prop_assert_eq!(up, via_left);
    }

    /// Right moves are left moves on the mirrored grid.
    #[test]
    fn prop_right_is_mirrored_left(g in grid()) {
        let right = apply_move(&g, Direction::Right);
        let via_left = mirrored(&apply_move(&mirrored(&g), Direction::Left));
        prop_assert_eq!(right, via_left);
    }

    /// Down moves are right moves on the transposed grid.
    #[test]
    fn prop_down_is_transposed_right(g in grid()) {
        let down = apply_move(&g, Direction::Down);
        let via_right = apply_move(&g.transposed(), Direction::Right).transposed();
        prop_assert_eq!(down, via_right);
    }

    /// Tiles at the cap stop merging, so moves near it neither overflow nor
    /// break the tile invariant.
    #[test]
    fn prop_move_near_cap_keeps_invariants(g in grid_near_cap(), d in direction()) {
        let moved = apply_move(&g, d);
        prop_assert_eq!(moved.score(), g.score());
        prop_assert!(check_invariants(&moved).is_empty());
    }

    /// Transposing twice is the identity.
    #[test]
    fn prop_transpose_involution(g in grid()) {
        prop_assert_eq!(g.transposed().transposed(), g);
    }

    /// A line never gets longer or shorter and never gains tiles.
    #[test]
    fn prop_slide_line_length(values in prop::collection::vec(cell_value(), 0..10)) {
        let line: Vec<Cell> = values.iter().map(|&v| Cell::from_value(v).unwrap()).collect();
        let slid = slide_line(&line);
        prop_assert_eq!(slid.len(), line.len());
        let before = line.iter().filter(|c| !c.is_empty()).count();
        let after = slid.iter().filter(|c| !c.is_empty()).count();
        prop_assert!(after <= before);
        prop_assert!(after >= before.div_ceil(2));
    }

    /// Spawning on a non-full grid adds exactly one 2 on a previously empty cell.
    #[test]
    fn prop_spawn_adds_one_two(g in grid(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut spawned = g.clone();
        let coord = spawn_tile(&mut spawned, &mut rng);

        if g.is_full() {
            prop_assert!(coord.is_none());
            prop_assert_eq!(&spawned, &g);
        } else {
            let coord = coord.unwrap();
            prop_assert_eq!(g.get(coord), Some(Cell::Empty));
            prop_assert_eq!(spawned.get(coord), Some(Cell::Occupied(SPAWN_VALUE)));
            prop_assert_eq!(spawned.occupied_count(), g.occupied_count() + 1);
            prop_assert_eq!(spawned.score(), g.score() + SPAWN_VALUE);
        }
    }

    /// Spawning on a full grid leaves it unchanged.
    #[test]
    fn prop_spawn_on_full_grid_is_noop(g in full_grid(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut spawned = g.clone();
        prop_assert!(spawn_tile(&mut spawned, &mut rng).is_none());
        prop_assert_eq!(spawned, g);
    }

    /// `is_full` agrees with the occupied count.
    #[test]
    fn prop_is_full_iff_all_occupied(g in grid()) {
        let size = usize::from(g.rows()) * usize::from(g.cols());
        prop_assert_eq!(g.is_full(), g.occupied_count() == size);
    }

    /// Score is the plain sum of tile values.
    #[test]
    fn prop_score_is_sum(g in grid()) {
        let sum: u64 = g.to_rows().iter().flatten().sum();
        prop_assert_eq!(g.score(), sum);
    }
}

#[test]
fn test_example_row_with_trailing_four() {
    let g = Grid::from_rows(&[[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let moved = apply_move(&g, Direction::Left);

    assert_eq!(moved.to_rows()[0], vec![4, 4, 0, 0]);
    assert_eq!(g.score(), 8);
    assert_eq!(moved.score(), 8);
}

#[test]
fn test_example_row_with_gap() {
    let g = Grid::from_rows(&[[2, 0, 2, 2]]).unwrap();
    assert_eq!(apply_move(&g, Direction::Left).to_rows(), vec![vec![4, 2, 0, 0]]);
}
