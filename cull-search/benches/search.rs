use criterion::*;

use cull_othello::test_utils::random_position;
use cull_othello::{Board, Player};
use cull_search::{generate_candidates, favor_white, request_move, SearchConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn criterion_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_move");
    group.sample_size(10);

    let board = Board::starting();
    for depth in 1..6 {
        let config = SearchConfig::with_depth(depth);
        group.bench_with_input(BenchmarkId::new("start", depth), &config, |b, config| {
            b.iter(|| request_move(black_box(&board), Player::White, config))
        });
    }

    let mut rng = StdRng::seed_from_u64(3);
    let (midgame, player) = random_position(&mut rng, 24);
    let config = SearchConfig::with_depth(4);
    group.bench_function("midgame", |b| {
        b.iter(|| request_move(black_box(&midgame), player, &config))
    });

    group.finish();
}

fn criterion_candidates(c: &mut Criterion) {
    let board = Board::starting();
    c.bench_function("generate_candidates", |b| {
        b.iter(|| generate_candidates(black_box(&board), Player::White, favor_white))
    });
}

criterion_group!(search, criterion_search, criterion_candidates);
criterion_main!(search);
