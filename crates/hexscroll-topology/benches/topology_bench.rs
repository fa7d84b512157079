//! Benchmarks for hex grid geometry
//!
//! Measures performance of:
//! - World to pixel conversion
//! - Pixel to world conversion
//! - Z-order computation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hexscroll_topology::{z_order, PixelPos, TileMetrics, WorldCoord};

/// Benchmark cell centre computation
fn bench_world_to_pixel(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_to_pixel");
    let metrics = TileMetrics::default();

    let coords = [
        WorldCoord::ORIGIN,
        WorldCoord::new(1, 1),
        WorldCoord::new(-250, 731),
        WorldCoord::new(1_000_000, -1_000_001),
    ];

    for coord in coords {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(coord), &coord, |b, &c| {
            b.iter(|| metrics.world_to_pixel(black_box(c)))
        });
    }
    group.finish();
}

/// Benchmark hit testing
fn bench_pixel_to_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_to_world");
    let metrics = TileMetrics::default();

    let positions = [
        PixelPos::ORIGIN,
        PixelPos::new(1000.0, 1000.0),
        PixelPos::new(-12_345.5, 67_890.25),
    ];

    for pos in positions {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(pos), &pos, |b, &p| {
            b.iter(|| metrics.pixel_to_world(black_box(p)))
        });
    }
    group.finish();
}

/// Benchmark z-order over a viewport-sized block
fn bench_z_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("z_order");

    for &side in &[16i64, 64, 256] {
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &n| {
            b.iter(|| {
                let mut acc = 0i64;
                for row in 0..n {
                    for col in 0..n {
                        acc = acc.wrapping_add(z_order(black_box(col), black_box(row)));
                    }
                }
                acc
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_world_to_pixel, bench_pixel_to_world, bench_z_order);

criterion_main!(benches);
