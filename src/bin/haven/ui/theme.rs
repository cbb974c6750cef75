//! Color themes - the background-choice analog for a terminal.
//!
//! `dim` scales every themed color toward black, standing in for the
//! background opacity slider.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dusk,
    Forest,
    Tide,
    Ember,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Dusk, Theme::Forest, Theme::Tide, Theme::Ember];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dusk => "dusk",
            Theme::Forest => "forest",
            Theme::Tide => "tide",
            Theme::Ember => "ember",
        }
    }

    pub fn next(self) -> Theme {
        let index = Theme::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Theme::ALL[(index + 1) % Theme::ALL.len()]
    }

    /// Highlight color for playing tracks, gauges and the chart trace.
    pub fn accent(self, dim: f32) -> Color {
        let (r, g, b) = match self {
            Theme::Dusk => (168, 130, 255),
            Theme::Forest => (120, 220, 130),
            Theme::Tide => (90, 200, 230),
            Theme::Ember => (250, 150, 80),
        };
        scaled(r, g, b, dim)
    }

    /// Primary text color.
    pub fn text(self, dim: f32) -> Color {
        scaled(220, 220, 225, dim)
    }

    /// Secondary text, borders, stopped tracks.
    pub fn muted(self, dim: f32) -> Color {
        scaled(110, 110, 120, dim)
    }
}

fn scaled(r: u16, g: u16, b: u16, dim: f32) -> Color {
    let dim = dim.clamp(0.0, 1.0);
    Color::Rgb(
        (r as f32 * dim) as u8,
        (g as f32 * dim) as u8,
        (b as f32 * dim) as u8,
    )
}
