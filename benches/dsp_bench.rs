//! Benchmarks for DSP primitives and full ambience chains.
//!
//! Run with: cargo bench
//!
//! These measure the core render paths against real-time deadlines.
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Low-level primitives (noise loop, filter)
//!   - scenarios/*  Per-kind chains and the six-track mixer

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_noise,
    dsp::bench_filter,
    // Real-world scenarios
    scenarios::bench_chains,
    scenarios::bench_mixer,
);
criterion_main!(benches);
