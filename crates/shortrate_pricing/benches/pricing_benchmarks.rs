//! Criterion benchmarks for the short-rate bond pricer.
//!
//! Benchmarks cover:
//! - Brownian increment generation
//! - Path generation and discount integration (1K, 10K, 50K paths)
//! - Full pricing for varying maturities

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shortrate_pricing::mc::{
    compute_discount_factors, monte_carlo_bond_price, simulate_short_rate, SimulationParams,
};
use shortrate_pricing::rng::ShortRateRng;

fn params(maturity: f64, n: usize) -> SimulationParams {
    SimulationParams::new(0.04, 0.02, maturity, n).expect("valid benchmark parameters")
}

fn bench_increments(c: &mut Criterion) {
    let mut group = c.benchmark_group("increments");

    for n_samples in [10_000, 100_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_scaled", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = ShortRateRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal_scaled(&mut buffer, 0.1);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

fn bench_pipeline_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_stages");

    for n_paths in [1_000, 10_000, 50_000] {
        let p = params(1.0, n_paths);

        group.bench_with_input(BenchmarkId::new("simulate", n_paths), &p, |b, p| {
            let mut rng = ShortRateRng::from_seed(42);
            b.iter(|| black_box(simulate_short_rate(p, &mut rng)));
        });

        let paths = simulate_short_rate(&p, &mut ShortRateRng::from_seed(42));
        group.bench_with_input(BenchmarkId::new("discount", n_paths), &paths, |b, paths| {
            b.iter(|| black_box(compute_discount_factors(&paths.rates, &paths.time_grid)));
        });
    }

    group.finish();
}

fn bench_full_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pricing");
    group.sample_size(20);

    for maturity in [1.0, 5.0, 10.0] {
        let p = params(maturity, 10_000);
        group.bench_with_input(BenchmarkId::new("maturity_years", maturity), &p, |b, p| {
            let mut rng = ShortRateRng::from_seed(42);
            b.iter(|| black_box(monte_carlo_bond_price(p, &mut rng)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_increments,
    bench_pipeline_stages,
    bench_full_pricing
);
criterion_main!(benches);
