//! Benchmarks for chess-walker
//!
//! Run with: cargo bench

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion,
};

use chess_walker::client::UserRating;
use chess_walker::walker::{Frontier, RatingTracker};

/// Frontier of `size` users with ratings spread over all bands
fn mixed_frontier(size: usize) -> Frontier {
    let mut frontier = Frontier::new();
    for i in 0..size {
        frontier.push(UserRating::new(
            format!("player-{}", i),
            ((i * 37) % 2400) as i32,
        ));
    }
    frontier
}

fn benchmark_band_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_selection");

    // Uneven counts so the band ordering actually has to sort
    let mut tracker = RatingTracker::new();
    for rating in [100, 100, 500, 500, 500, 900, 1700, 1700, 2100] {
        tracker.record(rating);
    }

    for size in [100, 1_000, 10_000] {
        let frontier = mixed_frontier(size);

        group.bench_with_input(
            BenchmarkId::new("select_next", size),
            &frontier,
            |b, frontier| {
                b.iter_batched(
                    || frontier.clone(),
                    |mut frontier| black_box(tracker.select_next(&mut frontier)),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_frontier_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier");

    group.bench_function("push_pop", |b| {
        let mut frontier = mixed_frontier(1_000);
        b.iter(|| {
            frontier.push(UserRating::new("transient", 1234));
            black_box(frontier.pop());
        });
    });

    // Shifting removal from the front is the worst case a band scan can hit
    for size in [100, 1_000, 10_000] {
        let frontier = mixed_frontier(size);

        group.bench_with_input(
            BenchmarkId::new("remove_front", size),
            &frontier,
            |b, frontier| {
                b.iter_batched(
                    || frontier.clone(),
                    |mut frontier| black_box(frontier.remove(0)),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_band_selection,
    benchmark_frontier_operations
);
criterion_main!(benches);
