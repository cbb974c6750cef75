//! Waveform oscilloscope widget.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::theme::Theme;

/// Render the mixed output as a scrolling waveform.
pub fn render_scope(frame: &mut Frame, area: Rect, audio_buffer: &[f32], theme: Theme, dim: f32) {
    let block = Block::default()
        .title(" waveform ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted(dim)));

    let data: Vec<(f64, f64)> = audio_buffer
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / audio_buffer.len().max(1) as f64, sample as f64))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.accent(dim)))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(theme.muted(dim))),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(theme.muted(dim))),
        );

    frame.render_widget(chart, area);
}
