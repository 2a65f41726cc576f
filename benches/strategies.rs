//! Benchmark: every strategy on the same random terrain.
//!
//! Run with:
//! `cargo bench --bench strategies`
//!
//! The terrain is built once per group from a fixed seed and borrowed by all
//! strategies, so the comparison is over identical input.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rain_trap::utils::{deterministic_terrain, random_terrain};
use rain_trap::{compute_trapped_water, Strategy, TrapStrategy};
use rand::{rngs::StdRng, SeedableRng};

const CELLS: usize = 100_000;
const MAX_HEIGHT: i64 = 99_999;

fn bench_random_terrain(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let terrain = random_terrain(&mut rng, CELLS, MAX_HEIGHT);

    let mut group = c.benchmark_group("trap_random_100k");
    group.measurement_time(Duration::from_secs(6));
    group.throughput(Throughput::Elements(CELLS as u64));
    for strategy in Strategy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(strategy), &terrain, |b, t| {
            b.iter(|| strategy.trapped_water(black_box(t)))
        });
    }
    group.finish();
}

fn bench_jagged_terrain(c: &mut Criterion) {
    let terrain = deterministic_terrain(CELLS, 997);

    let mut group = c.benchmark_group("trap_jagged_100k");
    group.throughput(Throughput::Elements(CELLS as u64));
    for strategy in Strategy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(strategy), &terrain, |b, t| {
            b.iter(|| strategy.trapped_water(black_box(t)))
        });
    }
    group.finish();
}

/// Callers that own a fresh terrain per call (the cost of producing the
/// input is excluded by batching).
fn bench_owned_input(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let terrain = random_terrain(&mut rng, CELLS, MAX_HEIGHT);

    let mut group = c.benchmark_group("trap_owned_100k");
    group.bench_function("compute_trapped_water", |b| {
        b.iter_batched(
            || terrain.clone(),
            |t| black_box(compute_trapped_water(&t)),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_random_terrain, bench_jagged_terrain, bench_owned_input);
criterion_main!(benches);
