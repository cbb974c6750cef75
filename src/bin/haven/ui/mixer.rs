//! Track slider widgets - one gauge per ambience plus the master row.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use haven_dsp::engine::Ambience;

use crate::app::App;

pub fn render_tracks(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" mixer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.muted(app.dim)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // One row per track, a spacer, then the master gauge.
    let mut constraints = vec![Constraint::Length(1); Ambience::ALL.len()];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, kind) in Ambience::ALL.into_iter().enumerate() {
        render_track_row(frame, rows[index], app, kind, index == app.selected);
    }

    let master_row = rows[Ambience::ALL.len() + 1];
    let master = app.engine.master_volume();
    let gauge = Gauge::default()
        .ratio(master as f64)
        .label(format!("master  {:3.0}%", master * 100.0))
        .gauge_style(
            Style::default()
                .fg(app.theme.text(app.dim))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(gauge, master_row);
}

fn render_track_row(frame: &mut Frame, area: Rect, app: &App, kind: Ambience, selected: bool) {
    let playing = app.engine.is_playing(kind);
    let volume = app.engine.volume(kind);

    let marker = if selected { "›" } else { " " };
    let state = if playing { "▶" } else { " " };
    let label = format!("{marker} {state} {:<10} {:3.0}%", kind.name(), volume * 100.0);

    let mut style = Style::default().fg(if playing {
        app.theme.accent(app.dim)
    } else {
        app.theme.muted(app.dim)
    });
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    let gauge = Gauge::default()
        .ratio(volume as f64)
        .label(label)
        .gauge_style(style);
    frame.render_widget(gauge, area);
}
