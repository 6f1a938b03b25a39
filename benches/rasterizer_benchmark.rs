#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the circle and line rasterizers.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_raster::demo::{self, DemoConfig};
use pixel_raster::prelude::*;
use std::hint::black_box;

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    for radius in [10, 60, 250, 1000] {
        let size = (2 * radius + 1) as u32;
        let circle = Circle::new(Point::new(radius, radius), radius);

        for algorithm in CircleAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), radius),
                &circle,
                |b, &circle| {
                    let mut fb = Framebuffer::new(size, size).expect("framebuffer creation should succeed");
                    b.iter(|| algorithm.draw(&mut fb, black_box(circle), Rgba::WHITE));
                },
            );
        }
    }

    group.finish();
}

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    let cases = [
        ("horizontal", Segment::from_coords(0, 500, 999, 500)),
        ("diagonal", Segment::from_coords(0, 0, 999, 999)),
        ("shallow", Segment::from_coords(0, 0, 999, 333)),
        ("steep", Segment::from_coords(0, 999, 250, 0)),
    ];

    for (label, segment) in cases {
        for algorithm in LineAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), label), &segment, |b, &segment| {
                let mut fb = Framebuffer::new(1000, 1000).expect("framebuffer creation should succeed");
                b.iter(|| algorithm.draw(&mut fb, black_box(segment), Rgba::WHITE));
            });
        }
    }

    group.finish();
}

fn scene_benchmark(c: &mut Criterion) {
    let config = DemoConfig::new();

    c.bench_function("scene/glyphs_bresenham", |b| {
        b.iter(|| demo::render_glyphs(LineAlgorithm::Bresenham, black_box(&config)).unwrap());
    });
    c.bench_function("scene/encode_circle_png", |b| {
        let fb = demo::render_circle(CircleAlgorithm::Midpoint, &config).unwrap();
        b.iter(|| PngEncoder::to_bytes(black_box(&fb)).unwrap());
    });
}

criterion_group!(benches, circle_benchmark, line_benchmark, scene_benchmark);
criterion_main!(benches);
