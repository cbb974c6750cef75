//! Benchmarks for the looping noise buffer.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use haven_dsp::dsp::noise::NoiseLoop;

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    // One-time buffer fill (happens at chain build, off the render thread).
    group.bench_function("fill_2s_48k", |b| {
        b.iter(|| black_box(NoiseLoop::with_duration(2.0, 48_000.0)))
    });

    // Steady-state looped playback.
    for &size in BLOCK_SIZES {
        let mut noise = NoiseLoop::with_duration(2.0, 48_000.0);
        let mut buffer = vec![0.0f32; size];
        group.bench_with_input(BenchmarkId::new("render", size), &size, |b, _| {
            b.iter(|| {
                noise.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
