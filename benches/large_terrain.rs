//! Benchmark: large terrains, with resident-memory deltas.
//!
//! Run with:
//! `cargo bench --bench large_terrain`
//!
//! Mainly a sanity check that only the scan strategy allocates: its RSS delta
//! grows with the terrain, the others stay flat.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rain_trap::utils::random_terrain;
use rain_trap::{Strategy, TrapStrategy};
use rand::{rngs::StdRng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_large(c: &mut Criterion) {
    let mut sys = System::new();
    let mut group = c.benchmark_group("trap_large");
    group.sample_size(10);

    // Example sizes; tune as needed for your machine.
    for &len in &[1_000_000usize, 10_000_000] {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let terrain = random_terrain(&mut rng, len, len as i64);

        for strategy in Strategy::ALL {
            let before = rss_kib(&mut sys);
            black_box(strategy.trapped_water(&terrain));
            let after = rss_kib(&mut sys);
            // record memory delta to stderr to avoid criterion noise
            eprintln!(
                "RSS KiB delta ({strategy} {len}): {}",
                after.saturating_sub(before)
            );

            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &terrain, |b, t| {
                b.iter(|| strategy.trapped_water(black_box(t)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_large);
criterion_main!(benches);
