//! Performance benchmarks for demand_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use demand_core::{aggregate, run_parallel_trials, simulate_totals, DemandTable, SimulationParams};

fn bench_simulation(c: &mut Criterion) {
    let aggregates = aggregate(&DemandTable::sample_week()).unwrap();

    let mut group = c.benchmark_group("simulate_totals");
    for trials in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            let params = SimulationParams::default().with_seed(42).with_trials(trials);
            b.iter(|| black_box(simulate_totals(&aggregates, &params)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("parallel_trials");
    for trials in [10_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            let params = SimulationParams::default().with_seed(42).with_trials(trials);
            b.iter(|| black_box(run_parallel_trials(&aggregates, &params, None, false)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simulation);
criterion_main!(benches);
