//! Performance benchmarks for the weekly birthday schedule.
//!
//! These benchmarks measure `BirthdayRegistry::upcoming` over registries of
//! different sizes, with birthdays spread across the whole year.

use assistant_bot::{BirthdayDate, BirthdayRegistry, ContactName};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a registry with `size` birthdays spread over the year.
fn create_registry(size: usize) -> BirthdayRegistry {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut registry = BirthdayRegistry::new();

    for i in 0..size {
        let date = start + Days::new((i % 365) as u64);
        registry.add(
            ContactName::new(format!("contact_{}", i)).unwrap(),
            BirthdayDate::from_date(date),
        );
    }

    registry
}

/// Benchmark the schedule computation at several registry sizes.
fn bench_upcoming(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
    let mut group = c.benchmark_group("upcoming");

    for size in [10, 100, 1_000, 10_000] {
        let registry = create_registry(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| black_box(registry.upcoming(black_box(today))));
        });
    }

    group.finish();
}

/// Benchmark registry inserts, which scan for an existing name.
fn bench_add(c: &mut Criterion) {
    c.bench_function("add_1000", |b| {
        b.iter(|| black_box(create_registry(1_000)));
    });
}

criterion_group!(benches, bench_upcoming, bench_add);
criterion_main!(benches);
