//! TUI module for haven.
//!
//! Two switchable layouts: the Mixer (tracks, sliders, waveform) and
//! Focus (session clock, now-playing, spectrum).

mod mixer;
mod scope;
pub mod spectrum;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};

use haven_dsp::engine::Ambience;

use crate::app::App;
use mixer::render_tracks;
use scope::render_scope;
use spectrum::render_spectrum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Mixer,
    Focus,
}

impl ViewMode {
    pub fn next(self) -> ViewMode {
        match self {
            ViewMode::Mixer => ViewMode::Focus,
            ViewMode::Focus => ViewMode::Mixer,
        }
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    match app.view {
        ViewMode::Mixer => render_mixer_view(frame, app),
        ViewMode::Focus => render_focus_view(frame, app),
    }
}

fn render_mixer_view(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Track sliders + master
            Constraint::Length(8),  // Waveform
            Constraint::Length(1),  // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_tracks(frame, chunks[1], app);
    render_scope(frame, chunks[2], &app.audio_buffer, app.theme, app.dim);
    render_help(
        frame,
        chunks[3],
        app,
        " [1-6/Space] Play/Stop  [↑↓] Select  [←→] Volume  [-+] Master  [A] Stop All  [P] Pause  [Tab] View  [T] Theme  [Q] Quit",
    );
}

fn render_focus_view(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(5),  // Session clock + now playing
            Constraint::Min(8),     // Spectrum
            Constraint::Length(1),  // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_session(frame, chunks[1], app);
    render_spectrum(frame, chunks[2], app.spectrum.data(), app.theme, app.dim);
    render_help(
        frame,
        chunks[3],
        app,
        " [1-6] Play/Stop  [A] Stop All  [P] Pause  [Tab] View  [T] Theme  [Q] Quit",
    );
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let playing = Ambience::ALL
        .iter()
        .filter(|&&kind| app.engine.is_playing(kind))
        .count();

    let mut spans = vec![
        Span::styled(
            format!(" {playing} playing  "),
            Style::default().fg(app.theme.accent(app.dim)),
        ),
        Span::styled(
            format!("master {:.0}%  ", app.engine.master_volume() * 100.0),
            Style::default().fg(app.theme.text(app.dim)),
        ),
        Span::styled(
            format!("{:.0} kHz  ", app.engine.sample_rate() / 1000.0),
            Style::default().fg(app.theme.muted(app.dim)),
        ),
        Span::styled(
            format!("theme:{}  ", app.theme.name()),
            Style::default().fg(app.theme.muted(app.dim)),
        ),
    ];

    if app.engine.is_suspended() {
        spans.push(Span::styled(
            "· suspended ",
            Style::default().fg(app.theme.accent(app.dim)),
        ));
    }
    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!("· {status} "),
            Style::default().fg(app.theme.accent(app.dim)),
        ));
    }

    let block = Block::default()
        .title(" haven ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.muted(app.dim)));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_session(frame: &mut Frame, area: Rect, app: &App) {
    let elapsed = app.session_start.elapsed().as_secs();
    let clock = format!(
        "{:02}:{:02}:{:02}",
        elapsed / 3600,
        (elapsed % 3600) / 60,
        elapsed % 60
    );

    let playing: Vec<&str> = Ambience::ALL
        .iter()
        .filter(|&&kind| app.engine.is_playing(kind))
        .map(|kind| kind.name())
        .collect();
    let now_playing = if playing.is_empty() {
        "silence".to_string()
    } else {
        playing.join(" + ")
    };

    let lines = vec![
        Line::from(Span::styled(
            clock,
            Style::default().fg(app.theme.accent(app.dim)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            now_playing,
            Style::default().fg(app.theme.text(app.dim)),
        )),
    ];

    let block = Block::default()
        .title(" session ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.muted(app.dim)));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect, app: &App, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(app.theme.muted(app.dim)));
    frame.render_widget(help, area);
}
