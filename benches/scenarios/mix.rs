//! Benchmark the full mixer with every track playing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use haven_dsp::engine::{Ambience, Mixer};

use crate::BLOCK_SIZES;

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mixer");

    for &size in BLOCK_SIZES {
        let mut mixer = Mixer::new(48_000.0);
        for kind in Ambience::ALL {
            mixer.play(kind);
        }
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("six_tracks", size), &size, |b, _| {
            b.iter(|| {
                mixer.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
