use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use holiday_engine::{Catalog, ErrorMode, Rule};

const CANADA: &str = include_str!("../tests/fixtures/canada.json");

fn resolve_benchmark(c: &mut Criterion) {
    let catalog = Catalog::from_json(CANADA).unwrap();

    c.bench_function("resolve_all single year", |b| {
        b.iter(|| catalog.resolve_all(black_box(2024)).unwrap())
    });

    c.bench_function("resolve_all 1900-2100", |b| {
        b.iter(|| {
            for year in 1900..=2100 {
                black_box(catalog.resolve_all(year).unwrap());
            }
        })
    });

    c.bench_function("resolve_all_with continue", |b| {
        b.iter(|| {
            catalog
                .resolve_all_with(black_box(2024), ErrorMode::ContinueOnError)
                .unwrap()
        })
    });

    let boxing_day = NaiveDate::from_ymd_opt(2022, 12, 26).unwrap();
    c.bench_function("holidays_on", |b| {
        b.iter(|| catalog.holidays_on(black_box(boxing_day), ErrorMode::Atomic).unwrap())
    });

    let easter = Rule::easter_offset(0);
    c.bench_function("easter 1583-4099", |b| {
        b.iter(|| {
            for year in 1583..=4099 {
                black_box(easter.evaluate(year).unwrap());
            }
        })
    });

    c.bench_function("catalog from_json", |b| {
        b.iter(|| Catalog::from_json(black_box(CANADA)).unwrap())
    });
}

criterion_group!(benches, resolve_benchmark);
criterion_main!(benches);
