use crate::{
    dsp::filter::{FilterResponse, SVFilter},
    graph::node::{Modulatable, RenderCtx, SignalNode},
};

/*
Filter Node
===========

Shapes raw noise into an ambience timbre. Each kind's response,
cutoff and Q come from the chain table; the node itself is generic.

Modulation targets the cutoff (the ocean swell) or the resonance.
`base_*` holds the untouched table value so block-rate modulation is
always `base + lfo * depth`; it never compounds on the previous
block's modulated value.
*/

#[derive(Clone, Copy, Debug)]
pub enum FilterParam {
    Cutoff,
    Resonance,
}

pub struct FilterNode {
    filter: SVFilter,
    base_cutoff: f32,
    base_resonance: f32,
}

impl FilterNode {
    pub fn new(response: FilterResponse, cutoff_hz: f32, resonance: f32) -> Self {
        Self {
            filter: SVFilter::new(response, cutoff_hz, resonance),
            base_cutoff: cutoff_hz,
            base_resonance: resonance,
        }
    }

    pub fn lowpass(cutoff_hz: f32, resonance: f32) -> Self {
        Self::new(FilterResponse::LowPass, cutoff_hz, resonance)
    }

    pub fn highpass(cutoff_hz: f32, resonance: f32) -> Self {
        Self::new(FilterResponse::HighPass, cutoff_hz, resonance)
    }

    pub fn bandpass(cutoff_hz: f32, resonance: f32) -> Self {
        Self::new(FilterResponse::BandPass, cutoff_hz, resonance)
    }

    /// Cutoff currently applied to the underlying filter (post-modulation).
    pub fn cutoff_hz(&self) -> f32 {
        self.filter.cutoff_hz
    }

    pub fn resonance(&self) -> f32 {
        self.filter.resonance
    }
}

impl Modulatable for FilterNode {
    type Param = FilterParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            FilterParam::Cutoff => self.base_cutoff,
            FilterParam::Resonance => self.base_resonance,
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        let final_value = base + modulation;
        match param {
            FilterParam::Cutoff => {
                self.base_cutoff = base;
                self.filter.set_cutoff(final_value.clamp(20.0, 20_000.0));
            }
            FilterParam::Resonance => {
                self.base_resonance = base;
                self.filter.set_resonance(final_value.clamp(0.05, 10.0));
            }
        }
    }
}

impl SignalNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx);
    }
}
