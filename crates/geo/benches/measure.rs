//! Benchmarks for distance and measurement hot paths.

use basinview_geo::{haversine_distance_meters, path_length, polygon_area, Coordinate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn ring_of(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * std::f64::consts::TAU;
            Coordinate::new(23.5 + angle.sin() * 0.5, 121.0 + angle.cos() * 0.5).unwrap()
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let taipei = Coordinate::new(25.0330, 121.5654).unwrap();
    let kaohsiung = Coordinate::new(22.6273, 120.3014).unwrap();

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance_meters(black_box(&taipei), black_box(&kaohsiung)))
    });
}

fn bench_ring_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_measurement");

    for size in [10, 100, 1000, 10000].iter() {
        let ring = ring_of(*size);

        group.bench_with_input(BenchmarkId::new("path_length", size), size, |b, _| {
            b.iter(|| path_length(black_box(&ring)))
        });
        group.bench_with_input(BenchmarkId::new("polygon_area", size), size, |b, _| {
            b.iter(|| polygon_area(black_box(&ring)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_ring_measurement);
criterion_main!(benches);
