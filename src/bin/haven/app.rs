//! Application state and event loop.

use std::time::{Duration, Instant};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use rtrb::Consumer;
use serde::{Deserialize, Serialize};

use haven_dsp::engine::{Ambience, Engine, EngineError};
use haven_dsp::settings::SettingsStore;

use crate::ui::{self, spectrum::SpectrumAnalyzer, theme::Theme, ViewMode};

/// Audio visualization buffer size (samples kept for scope/spectrum).
pub const VIS_BUFFER_SIZE: usize = 1024;

/// Ring capacity between the render thread and the UI.
const SCOPE_CAPACITY: usize = 8192;

/// Volume step for the slider keys.
const VOLUME_STEP: f32 = 0.05;

/// UI preferences persisted between sessions (the engine itself
/// persists nothing).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UiSettings {
    pub theme: Theme,
    pub dim: f32,
    pub view: ViewMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dusk,
            dim: 1.0,
            view: ViewMode::Mixer,
        }
    }
}

pub struct App {
    pub engine: Engine,
    pub selected: usize,
    pub theme: Theme,
    pub dim: f32,
    pub view: ViewMode,
    pub status: Option<String>,
    pub session_start: Instant,
    pub audio_buffer: Vec<f32>,
    pub spectrum: SpectrumAnalyzer,
    scope_rx: Consumer<f32>,
    store: Option<SettingsStore>,
    should_quit: bool,
}

impl App {
    pub fn new() -> EyreResult<Self> {
        let engine = Engine::open().wrap_err("failed to open the audio output")?;

        let (scope_tx, scope_rx) = rtrb::RingBuffer::new(SCOPE_CAPACITY);
        engine.set_scope(scope_tx);

        let spectrum = SpectrumAnalyzer::new(VIS_BUFFER_SIZE, engine.sample_rate());

        let store = SettingsStore::open_default();
        let settings = store
            .as_ref()
            .and_then(|s| s.load::<UiSettings>("ui"))
            .unwrap_or_default();

        Ok(Self {
            engine,
            selected: 0,
            theme: settings.theme,
            dim: settings.dim.clamp(0.3, 1.0),
            view: settings.view,
            status: None,
            session_start: Instant::now(),
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum,
            scope_rx,
            store,
            should_quit: false,
        })
    }

    /// Run the UI event loop (~60 fps).
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.spectrum.update(&self.audio_buffer);

            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn save_settings(&self) {
        if let Some(store) = &self.store {
            let settings = UiSettings {
                theme: self.theme,
                dim: self.dim,
                view: self.view,
            };
            if let Err(err) = store.save("ui", &settings) {
                eprintln!("failed to save settings: {err}");
            }
        }
    }

    pub fn selected_kind(&self) -> Ambience {
        Ambience::ALL[self.selected]
    }

    /// Drain the scope ring, keeping the most recent samples.
    fn poll_audio(&mut self) {
        let mut new_samples = Vec::new();
        while let Ok(sample) = self.scope_rx.pop() {
            new_samples.push(sample);
        }

        if !new_samples.is_empty() {
            self.audio_buffer.extend(new_samples);
            if self.audio_buffer.len() > VIS_BUFFER_SIZE {
                let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
                self.audio_buffer.drain(0..excess);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        self.status = None;

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.selected = index;
                self.toggle(Ambience::ALL[index]);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle(self.selected_kind());
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(Ambience::ALL.len() - 1);
            }
            KeyCode::Left => {
                self.nudge_volume(-VOLUME_STEP);
            }
            KeyCode::Right => {
                self.nudge_volume(VOLUME_STEP);
            }
            KeyCode::Char('-') => {
                self.nudge_master(-VOLUME_STEP);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.nudge_master(VOLUME_STEP);
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.engine.stop_all();
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.toggle_suspend();
            }
            KeyCode::Tab | KeyCode::Char('v') | KeyCode::Char('V') => {
                self.view = self.view.next();
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.theme = self.theme.next();
            }
            KeyCode::Char('d') => {
                self.dim = (self.dim - 0.1).max(0.3);
            }
            KeyCode::Char('D') => {
                self.dim = (self.dim + 0.1).min(1.0);
            }
            _ => {}
        }
    }

    fn toggle(&mut self, kind: Ambience) {
        if let Err(err) = self.engine.toggle(kind) {
            self.report(kind, err);
        }
    }

    /// Sliders clamp before calling, like any bounded control; the
    /// engine's reject-out-of-range policy still backstops them.
    fn nudge_volume(&mut self, delta: f32) {
        let kind = self.selected_kind();
        let volume = (self.engine.volume(kind) + delta).clamp(0.0, 1.0);
        if let Err(err) = self.engine.set_volume(kind, volume) {
            self.report(kind, err);
        }
    }

    fn nudge_master(&mut self, delta: f32) {
        let volume = (self.engine.master_volume() + delta).clamp(0.0, 1.0);
        if let Err(err) = self.engine.set_master_volume(volume) {
            self.status = Some(err.to_string());
        }
    }

    fn toggle_suspend(&mut self) {
        let result = if self.engine.is_suspended() {
            self.engine.resume()
        } else {
            self.engine.suspend()
        };
        if let Err(err) = result {
            self.status = Some(err.to_string());
        }
    }

    fn report(&mut self, kind: Ambience, err: EngineError) {
        self.status = Some(format!("{kind}: {err}"));
    }
}
