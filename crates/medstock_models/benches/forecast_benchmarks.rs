//! Criterion benchmarks for pay-period forecasting.
//!
//! Measures schedule construction and medication matching across
//! horizon lengths and medication list sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use medstock_core::types::{Date, Medication};
use medstock_models::forecast::{generate_forecast, ForecastConfig};
use medstock_models::schedules::build_periods;

/// Generate medications with run-out dates spread over a year.
fn generate_medications(n: usize) -> Vec<Medication> {
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let med = Medication::new(format!("Medication {}", i)).with_unit_price(5.0 + i as f64);
            if i % 7 == 0 {
                med
            } else {
                med.with_run_out_date(start.add_days((i * 13 % 365) as u64).unwrap())
            }
        })
        .collect()
}

/// Benchmark schedule construction for increasing horizons.
fn bench_build_periods(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_periods");
    let start = Date::from_ymd(2024, 1, 1).unwrap();

    for months in [1u32, 12, 60] {
        group.bench_with_input(BenchmarkId::new("fortnightly", months), &months, |b, &m| {
            b.iter(|| build_periods(black_box(start), 14, m).unwrap());
        });
    }

    group.finish();
}

/// Benchmark end-to-end forecast generation.
fn bench_generate_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_forecast");
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let config = ForecastConfig::new(14, 12);

    for size in [10, 100, 500] {
        let meds = generate_medications(size);
        group.bench_with_input(BenchmarkId::new("medications", size), &meds, |b, meds| {
            b.iter(|| generate_forecast(black_box(&config), start, black_box(meds)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_periods, bench_generate_forecast);
criterion_main!(benches);
