//! Benchmark: play complete games, including the automatic reshuffle.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use memory_match::{CardId, GameConfig, GameController};

fn symbols(pairs: usize) -> Vec<String> {
    (0..2 * pairs).map(|i| format!("s{}", i % pairs)).collect()
}

fn play_one_game(game: &mut GameController, pairs: u32) {
    for first in 0..pairs {
        game.flip(CardId::new(first));
        game.flip(CardId::new(first + pairs));
        game.advance(Duration::from_millis(1000));
    }
    game.run_until_idle();
    game.drain_events();
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");

    for pairs in [4usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &pairs, |b, &pairs| {
            let mut game = GameController::new(GameConfig::new().with_seed(1), symbols(pairs)).unwrap();
            b.iter(|| play_one_game(black_box(&mut game), pairs as u32));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_game);
criterion_main!(benches);
