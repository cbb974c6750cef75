use crate::{
    dsp::modulate::block_average,
    graph::node::{Modulatable, RenderCtx, SignalNode},
    MAX_BLOCK_SIZE,
};

/*
Modulate Node
=============

Drives a parameter on one node with the output of another. The engine
uses it once: the ocean chain's low-pass cutoff swept by a 0.1 Hz
sine, producing the rise-and-fall wave effect.

    modulated_value = base_value + (lfo * depth)

The LFO is rendered per block and averaged to a single value
(block-rate modulation). With sub-Hz modulators and the engine's block
sizes, stepping is well below audibility.

The modulator shares the chain's lifecycle: built with it, dropped
with it.
*/

pub struct Modulate<S, L>
where
    S: SignalNode + Modulatable,
    L: SignalNode,
{
    source: S,            // The node being modulated (e.g. FilterNode)
    lfo: L,               // The modulation source
    param: S::Param,      // Which parameter to drive
    depth: f32,           // Scale applied to the modulator output
    lfo_buffer: Vec<f32>, // Temp buffer for modulator output
}

impl<S, L> Modulate<S, L>
where
    S: SignalNode + Modulatable,
    L: SignalNode,
{
    pub fn new(source: S, lfo: L, param: S::Param, depth: f32) -> Self {
        Self {
            source,
            lfo,
            param,
            depth,
            lfo_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<S, L> SignalNode for Modulate<S, L>
where
    S: SignalNode + Modulatable,
    L: SignalNode,
{
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let len = out.len();

        self.lfo.render_block(&mut self.lfo_buffer[..len], ctx);
        let lfo_avg = block_average(&self.lfo_buffer[..len]);

        let base_value = self.source.get_param(self.param);
        let modulation = lfo_avg * self.depth;
        self.source
            .apply_modulation(self.param, base_value, modulation);

        self.source.render_block(out, ctx);
    }
}
