//! Spectrum analyzer widget.
//!
//! FFT of the mixed output with log-spaced bins, so the character of
//! each ambience is visible: rain centers near 1 kHz, ocean hugs the
//! low end and breathes with the swell.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use super::theme::Theme;

/// Number of log-spaced frequency bins to display.
const SPECTRUM_BINS: usize = 48;

const MIN_FREQ: f64 = 20.0;
const FLOOR_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    /// Hann window coefficients, one per input sample.
    window: Vec<f32>,
    /// FFT bin index backing each displayed bin.
    bin_indices: Vec<usize>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// Current display data: (frequency_hz, magnitude_db).
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    /// `buffer_len` is the FFT size and must match the visualization
    /// buffer handed to `update`.
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer_len);

        let window: Vec<f32> = (0..buffer_len)
            .map(|i| {
                let denom = (buffer_len.max(2) - 1) as f32;
                0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos())
            })
            .collect();

        // Log-spaced centers from 20 Hz to Nyquist.
        let max_freq = (sample_rate as f64 / 2.0).max(MIN_FREQ + 1.0);
        let ratio = max_freq / MIN_FREQ;
        let half = (buffer_len / 2).max(1);

        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        let mut spectrum = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = MIN_FREQ * ratio.powf(t);
            let index = ((freq * buffer_len as f64 / sample_rate as f64).round() as usize)
                .min(half - 1);
            bin_indices.push(index);
            spectrum.push((freq, FLOOR_DB));
        }

        Self {
            window,
            bin_indices,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            spectrum,
        }
    }

    /// Recompute the spectrum from the latest audio. Ignores buffers
    /// whose length does not match the planned FFT size.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for (slot, (&sample, &w)) in self
            .scratch
            .iter_mut()
            .zip(buffer.iter().zip(self.window.iter()))
        {
            slot.re = sample * w;
            slot.im = 0.0;
        }

        self.fft.process(&mut self.scratch);

        for (slot, &index) in self.spectrum.iter_mut().zip(self.bin_indices.iter()) {
            let bin = self.scratch[index];
            let power = (bin.re * bin.re + bin.im * bin.im).max(1e-12);
            slot.1 = (10.0 * (power as f64).log10()).max(FLOOR_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

pub fn render_spectrum(
    frame: &mut Frame,
    area: Rect,
    spectrum: &[(f64, f64)],
    theme: Theme,
    dim: f32,
) {
    let block = Block::default()
        .title(" spectrum ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted(dim)));

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.accent(dim)))
        .data(spectrum);

    let max_freq = spectrum.iter().map(|(f, _)| *f).fold(1.0, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_freq])
                .style(Style::default().fg(theme.muted(dim))),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, 10.0])
                .style(Style::default().fg(theme.muted(dim))),
        );

    frame.render_widget(chart, area);
}
