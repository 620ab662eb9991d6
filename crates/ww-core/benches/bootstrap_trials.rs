//! Criterion benchmarks for the Monte Carlo bootstrap hot path.
//!
//! Synthetic sighting pools keep the runs deterministic (fixed seed) so
//! they are comparable across machines and CI.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ww_common::{GeoPoint, SightingEvent};
use ww_core::inference::{AreaBootstrap, BootstrapConfig};

fn synthetic_pool(count: usize) -> Vec<SightingEvent> {
    (0..count)
        .map(|i| SightingEvent {
            date: NaiveDate::from_ymd_opt(2019, 7, 1).unwrap(),
            pods: "J".to_string(),
            latitude: 48.0 + (i % 100) as f64 * 0.005,
            longitude: -123.5 + (i / 100) as f64 * 0.005,
        })
        .collect()
}

fn bench_bootstrap(c: &mut Criterion) {
    let candidate = GeoPoint::new(48.25, -123.25);
    let pool = synthetic_pool(500);

    let mut group = c.benchmark_group("bootstrap");
    for trials in [10_000u64, 100_000] {
        let estimator = AreaBootstrap::new(BootstrapConfig {
            trials,
            seed: Some(42),
            ..BootstrapConfig::default()
        })
        .expect("config should validate");

        group.bench_with_input(
            BenchmarkId::new("estimate", trials),
            &estimator,
            |b, estimator| {
                b.iter(|| {
                    let estimate = estimator
                        .estimate(black_box(candidate), black_box(&pool))
                        .expect("estimate should compute");
                    black_box(estimate.probability);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_bootstrap);
criterion_main!(benches);
