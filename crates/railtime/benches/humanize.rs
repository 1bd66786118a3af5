//! Benchmarks for distance bucketing and phrasing.

use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use railtime::{distance_in_words, distance_of_seconds};
use std::hint::black_box;

fn bench_bucketing(c: &mut Criterion) {
    let samples: Vec<i64> = vec![0, 59, 150, 3_599, 3_600, 90_000, 2_600_000, 40_000_000];

    c.bench_function("distance_of_seconds", |b| {
        b.iter(|| {
            for &s in &samples {
                black_box(distance_of_seconds(black_box(s)));
            }
        })
    });
}

fn bench_phrasing(c: &mut Criterion) {
    let to = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let from = to - TimeDelta::hours(5);

    c.bench_function("distance_in_words", |b| {
        b.iter(|| distance_in_words(black_box(&from), black_box(&to)))
    });
}

criterion_group!(benches, bench_bucketing, bench_phrasing);
criterion_main!(benches);
