//! Benchmarks for the timeline filter
//!
//! Run with: cargo bench

use bridge_analytics::timeline::*;
use bridge_analytics::TimeSeriesRecord;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_test_records(count: usize) -> Vec<TimeSeriesRecord> {
    (0..count)
        .map(|i| {
            let inflow = 1_000_000.0 + (i % 17) as f64 * 10_000.0;
            let outflow = 900_000.0 + (i % 13) as f64 * 10_000.0;
            TimeSeriesRecord::new(
                format!("r{}", i),
                inflow,
                outflow,
                inflow + outflow,
                1704067200000 + i as i64 * 3_600_000,
            )
        })
        .collect()
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_view");

    for size in [100, 1000, 10000] {
        let timeline = Timeline::new(create_test_records(size)).unwrap();
        let selection = RangeSelection::up_to(Percent::clamped(50.0).unwrap());

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("view_{}", size), |b| {
            b.iter(|| timeline.view(black_box(selection)).len())
        });
    }

    group.finish();
}

fn bench_compute_filtered_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_filtered_view");

    for size in [100, 1000, 10000] {
        let records = create_test_records(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("slider_sweep_{}", size), |b| {
            b.iter(|| {
                let mut visible = 0;
                for step in 0..=100 {
                    let end = Percent::clamped(step as f64).unwrap();
                    visible += compute_filtered_view(black_box(&records), end).unwrap().len();
                }
                visible
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view, bench_compute_filtered_view);
criterion_main!(benches);
