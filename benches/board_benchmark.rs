//! Benchmarks for the board engine.
//!
//! Covers single moves in each direction and complete random games.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use merge2048::board::{Direction, Grid, apply_move};
use merge2048::Session;

fn sample_grid() -> Grid {
    Grid::from_rows(&[
        [2, 2, 4, 8],
        [0, 4, 4, 2],
        [16, 0, 16, 2],
        [2, 8, 0, 8],
    ])
    .unwrap()
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = sample_grid();

    for direction in Direction::ALL {
        c.bench_function(&format!("apply_move_{direction}"), |b| {
            b.iter(|| black_box(apply_move(black_box(&grid), black_box(direction))));
        });
    }
}

fn bench_large_grid_move(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut session = Session::with_seed(32, 32, 3).unwrap();
    for _ in 0..500 {
        let direction = Direction::ALL[rng.gen_range(0..4)];
        session.apply_player_move(direction).unwrap();
    }
    let grid = session.grid().clone();

    c.bench_function("apply_move_32x32", |b| {
        b.iter(|| black_box(apply_move(black_box(&grid), Direction::Down)));
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("random_game_4x4", |b| {
        b.iter(|| {
            let mut session = Session::with_seed(4, 4, black_box(42)).unwrap();
            let mut rng = StdRng::seed_from_u64(42);
            while !session.is_terminated() {
                let direction = Direction::ALL[rng.gen_range(0..4)];
                session.apply_player_move(direction).unwrap();
            }
            black_box(session.score())
        });
    });
}

criterion_group!(benches, bench_apply_move, bench_large_grid_move, bench_full_game);
criterion_main!(benches);
