use std::f32::consts::TAU;

use crate::graph::node::RenderCtx;

/*
Sub-Audio Sine Oscillator
=========================

The only modulator the engine needs: a slow sine that sweeps a filter
parameter. At 0.1 Hz one full rise-and-fall takes ten seconds, which
is what turns a static low-pass rumble into ocean swell.

Phase is a normalized [0, 1) accumulator advanced per sample, so the
waveform is continuous across blocks of any size. A fresh instance
starts at phase zero; sample n is sin(2*pi*f*n/sr).
*/

pub struct SineLfo {
    rate_hz: f32,
    phase: f32,
}

impl SineLfo {
    pub fn new(rate_hz: f32) -> Self {
        Self {
            rate_hz,
            phase: 0.0,
        }
    }

    pub fn rate_hz(&self) -> f32 {
        self.rate_hz
    }

    pub fn render(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let step = self.rate_hz / ctx.sample_rate;

        for sample in out.iter_mut() {
            *sample = (TAU * self.phase).sin();
            self.phase += step;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_closed_form() {
        let sample_rate = 48_000.0;
        let rate = 2.0;
        let mut lfo = SineLfo::new(rate);
        let mut buffer = vec![0.0f32; 256];
        lfo.render(&mut buffer, &RenderCtx::new(sample_rate));

        let n = 100;
        let expected = (TAU * rate * n as f32 / sample_rate).sin();
        assert!(
            (buffer[n] - expected).abs() < 1e-5,
            "expected {expected}, got {}",
            buffer[n]
        );
    }

    #[test]
    fn phase_is_continuous_across_blocks() {
        let ctx = RenderCtx::new(48_000.0);

        let mut whole = SineLfo::new(3.0);
        let mut one_pass = vec![0.0f32; 512];
        whole.render(&mut one_pass, &ctx);

        let mut split = SineLfo::new(3.0);
        let mut two_pass = vec![0.0f32; 512];
        let (a, b) = two_pass.split_at_mut(200);
        split.render(a, &ctx);
        split.render(b, &ctx);

        for (i, (&x, &y)) in one_pass.iter().zip(two_pass.iter()).enumerate() {
            assert!(
                (x - y).abs() < 1e-5,
                "block boundary discontinuity at sample {i}: {x} vs {y}"
            );
        }
    }

    #[test]
    fn output_stays_in_range() {
        let mut lfo = SineLfo::new(0.1);
        let mut buffer = vec![0.0f32; 4096];
        lfo.render(&mut buffer, &RenderCtx::new(48_000.0));

        for &sample in &buffer {
            assert!((-1.0..=1.0).contains(&sample));
        }
    }
}
