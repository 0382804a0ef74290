// ABOUTME: Criterion benchmarks for the training analytics algorithms
// ABOUTME: Measures TRIMP batches, time in zones, HR drift, Eddington and race detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

//! Criterion benchmarks for the analytics algorithms.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qtrun::qtrun_core::models::{ActivityMetrics, ActivityMetricsBuilder, RaceCandidate};
use qtrun::qtrun_intelligence::algorithms::calculate_trimp;
use qtrun::qtrun_intelligence::analysis::calculate_training_loads;
use qtrun::qtrun_intelligence::eddington::calculate_eddington;
use qtrun::qtrun_intelligence::heart_rate_zones::calculate_time_in_zones;
use qtrun::qtrun_intelligence::hr_drift::calculate_hr_drift;
use qtrun::qtrun_intelligence::race_detection::default_race_detector;

const DATASET_SIZES: [usize; 3] = [10, 100, 1000];

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_activities(count: usize) -> Vec<ActivityMetrics> {
    let base_date = Utc::now();
    (0..count)
        .map(|index| {
            let moving_time = 1800_u64 + ((index * 137) % 3600) as u64;
            let average_hr = 130_u32 + ((index * 17) % 40) as u32;
            ActivityMetricsBuilder::new(base_date - Duration::days(index as i64), moving_time)
                .average_heart_rate(average_hr)
                .distance(5000.0 + ((index * 251) % 10_000) as f64)
                .build()
        })
        .collect()
}

/// One hour of 1 Hz samples with a slow upward drift
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_hr_stream(seconds: usize) -> Vec<i32> {
    (0..seconds)
        .map(|second| 135 + (second / 120) as i32 + (second % 7) as i32)
        .collect()
}

fn generate_candidates(count: usize) -> Vec<RaceCandidate> {
    const TITLES: [(&str, f64); 4] = [
        ("Morning Run", 8_000.0),
        ("Saturday parkrun", 5_020.0),
        ("Berlin Marathon", 42_300.0),
        ("Recovery jog", 4_000.0),
    ];
    (0..count)
        .map(|index| {
            let (title, distance) = TITLES[index % TITLES.len()];
            RaceCandidate::new(index.to_string(), title, Utc::now(), Some(distance))
        })
        .collect()
}

fn bench_trimp(c: &mut Criterion) {
    let mut group = c.benchmark_group("trimp");

    for count in DATASET_SIZES {
        let activities = generate_activities(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &activities,
            |b, activities| {
                b.iter(|| {
                    activities
                        .iter()
                        .map(|activity| calculate_trimp(black_box(activity), 190))
                        .collect::<Vec<_>>()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &activities,
            |b, activities| b.iter(|| calculate_training_loads(black_box(activities), 190)),
        );
    }

    group.finish();
}

fn bench_hr_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("hr_stream");
    let stream = generate_hr_stream(3600);

    group.throughput(Throughput::Elements(stream.len() as u64));
    group.bench_function("time_in_zones", |b| {
        b.iter(|| calculate_time_in_zones(black_box(&stream), 190));
    });
    group.bench_function("hr_drift", |b| {
        b.iter(|| calculate_hr_drift(black_box(&stream)));
    });

    group.finish();
}

fn bench_eddington(c: &mut Criterion) {
    let mut group = c.benchmark_group("eddington");

    for count in DATASET_SIZES {
        let distances: Vec<f64> = generate_activities(count)
            .iter()
            .filter_map(|activity| activity.distance)
            .map(|meters| meters / 1000.0)
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("calculate_eddington", count),
            &distances,
            |b, distances| b.iter(|| calculate_eddington(black_box(distances))),
        );
    }

    group.finish();
}

fn bench_race_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("race_detection");
    let detector = default_race_detector();

    for count in DATASET_SIZES {
        let candidates = generate_candidates(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("detect_races", count),
            &candidates,
            |b, candidates| b.iter(|| detector.detect_races(black_box(candidates), 0.5)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_trimp,
    bench_hr_stream,
    bench_eddington,
    bench_race_detection
);
criterion_main!(benches);
