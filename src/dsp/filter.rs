use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

/*
| response  | passes          | rejects      | used by              |
| --------- | --------------- | ------------ | -------------------- |
| low-pass  | below cutoff    | above cutoff | ocean                |
| high-pass | above cutoff    | below cutoff | fireplace            |
| band-pass | around cutoff   | outside      | rain, forest, cafe   |
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResponse {
    LowPass,
    HighPass,
    BandPass,
}

/// Topology-preserving state-variable filter.
///
/// Resonance is the quality factor Q: the damping coefficient is
/// `k = 1/Q`, so the chain table's Q values apply unscaled. Q below
/// 0.05 is clamped to keep the damping finite.
pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    pub cutoff_hz: f32,
    pub resonance: f32,
    response: FilterResponse,
}

const MIN_Q: f32 = 0.05;

impl SVFilter {
    pub fn new(response: FilterResponse, cutoff_hz: f32, resonance: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            resonance: resonance.max(MIN_Q),
            response,
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

    #[inline]
    fn compute_g(&self, ctx: &RenderCtx) -> f32 {
        let wd = TAU * self.cutoff_hz;
        let wa = (2.0 * ctx.sample_rate) * (wd / (2.0 * ctx.sample_rate)).tan();
        wa / (2.0 * ctx.sample_rate)
    }

    #[inline]
    fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> f32 {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        match self.response {
            FilterResponse::LowPass => v2,
            FilterResponse::BandPass => v1,
            FilterResponse::HighPass => sample - k * v1 - v2,
        }
    }

    /// Filter the buffer in place. `g` is recomputed per block so a
    /// swept cutoff takes effect at block rate.
    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        let g = self.compute_g(ctx);
        let k = 1.0 / self.resonance;

        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample, k, g);
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff_hz = cutoff;
    }

    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = resonance.max(MIN_Q);
    }
}
