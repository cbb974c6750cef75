use crate::{
    dsp::lfo::SineLfo,
    graph::node::{RenderCtx, SignalNode},
};

/*
LFO Node
========

Fixed-rate sine used as a modulation source. The engine's only use is
the ocean swell: a 0.1 Hz sine driving the low-pass cutoff through
`.modulate()`. The rate is set at construction and never changes; the
chain builder reads it from the chain table, so rebuilding a chain can
never accumulate drift.
*/

pub struct LfoNode {
    lfo: SineLfo,
}

impl LfoNode {
    pub fn sine(rate_hz: f32) -> Self {
        Self {
            lfo: SineLfo::new(rate_hz),
        }
    }

    pub fn rate_hz(&self) -> f32 {
        self.lfo.rate_hz()
    }
}

impl SignalNode for LfoNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.lfo.render(out, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_range_is_bipolar_unit() {
        let mut lfo = LfoNode::sine(0.1);
        let mut buffer = vec![0.0; 2048];
        lfo.render_block(&mut buffer, &RenderCtx::new(48_000.0));

        for &sample in &buffer {
            assert!(
                (-1.0..=1.0).contains(&sample),
                "LFO sample {} out of range",
                sample
            );
        }
    }

    #[test]
    fn rate_is_fixed_at_construction() {
        let lfo = LfoNode::sine(0.1);
        assert_eq!(lfo.rate_hz(), 0.1);
    }
}
