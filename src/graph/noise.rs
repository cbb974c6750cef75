use crate::dsp::noise::NoiseLoop;
use crate::graph::node::{RenderCtx, SignalNode};

/*
Noise Source Node
=================

The root of every ambience chain. Wraps a pre-filled looping noise
buffer; the downstream filter gives each ambience its character.

  NoiseNode::looping(2.0, 48_000.0)
      .through(FilterNode::bandpass(1000.0, 0.5))   // rain
*/

pub struct NoiseNode {
    noise: NoiseLoop,
}

impl NoiseNode {
    /// A fresh noise loop of `seconds` duration at `sample_rate`.
    pub fn looping(seconds: f32, sample_rate: f32) -> Self {
        Self {
            noise: NoiseLoop::with_duration(seconds, sample_rate),
        }
    }

    /// Loop length in samples.
    pub fn loop_len(&self) -> usize {
        self.noise.len()
    }
}

impl SignalNode for NoiseNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        self.noise.render(out);
    }
}
