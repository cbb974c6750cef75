//! Benchmarks for complete per-kind ambience chains.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use haven_dsp::engine::{build_chain, Ambience};
use haven_dsp::graph::{node::RenderCtx, SignalNode};

pub fn bench_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/chains");
    let sample_rate = 48_000.0;
    let ctx = RenderCtx::new(sample_rate);

    // Chain construction cost (play-time, off the render thread).
    group.bench_function("build_ocean", |b| {
        b.iter(|| black_box(build_chain(Ambience::Ocean, sample_rate)))
    });

    // Steady-state render per kind at a representative block size.
    for kind in Ambience::ALL {
        let mut chain = build_chain(kind, sample_rate);
        let mut buffer = vec![0.0f32; 256];
        group.bench_with_input(BenchmarkId::new("render", kind.name()), &kind, |b, _| {
            b.iter(|| {
                chain.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
