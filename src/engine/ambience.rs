use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::filter::FilterResponse;
use crate::engine::EngineError;

/// The six supported background-sound categories. The set is fixed at
/// compile time; tracks are created for every kind at engine startup
/// and never removed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ambience {
    Rain,
    Forest,
    Cafe,
    Ocean,
    Fireplace,
    Whitenoise,
}

/// How one ambience shapes its noise bed. `shape: None` is the raw
/// white-noise passthrough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainSpec {
    pub shape: Option<FilterSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    pub response: FilterResponse,
    pub cutoff_hz: f32,
    pub resonance: f32,
    pub swell: Option<SwellSpec>,
}

/// Slow cutoff sweep: `cutoff_hz +/- depth_hz` at `rate_hz`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwellSpec {
    pub rate_hz: f32,
    pub depth_hz: f32,
}

impl Ambience {
    pub const ALL: [Ambience; 6] = [
        Ambience::Rain,
        Ambience::Forest,
        Ambience::Cafe,
        Ambience::Ocean,
        Ambience::Fireplace,
        Ambience::Whitenoise,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Ambience::Rain => "rain",
            Ambience::Forest => "forest",
            Ambience::Cafe => "cafe",
            Ambience::Ocean => "ocean",
            Ambience::Fireplace => "fireplace",
            Ambience::Whitenoise => "whitenoise",
        }
    }

    /// The filter configuration behind each ambience. Pure data: one
    /// generic builder consumes it, there is no per-kind code path.
    ///
    /// Band centers pick out where each texture lives: rain sits at
    /// 1 kHz, forest chatter higher, cafe murmur lower. Fireplace
    /// keeps only the crackle above 500 Hz. Ocean is a 300 Hz rumble
    /// whose cutoff breathes between 100 and 500 Hz once per ten
    /// seconds.
    pub fn chain_spec(self) -> ChainSpec {
        let shape = match self {
            Ambience::Rain => Some(FilterSpec {
                response: FilterResponse::BandPass,
                cutoff_hz: 1000.0,
                resonance: 0.5,
                swell: None,
            }),
            Ambience::Forest => Some(FilterSpec {
                response: FilterResponse::BandPass,
                cutoff_hz: 2000.0,
                resonance: 0.3,
                swell: None,
            }),
            Ambience::Cafe => Some(FilterSpec {
                response: FilterResponse::BandPass,
                cutoff_hz: 800.0,
                resonance: 0.7,
                swell: None,
            }),
            Ambience::Ocean => Some(FilterSpec {
                response: FilterResponse::LowPass,
                cutoff_hz: 300.0,
                resonance: 1.0,
                swell: Some(SwellSpec {
                    rate_hz: 0.1,
                    depth_hz: 200.0,
                }),
            }),
            Ambience::Fireplace => Some(FilterSpec {
                response: FilterResponse::HighPass,
                cutoff_hz: 500.0,
                resonance: 0.8,
                swell: None,
            }),
            Ambience::Whitenoise => None,
        };

        ChainSpec { shape }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Ambience::Rain => 0,
            Ambience::Forest => 1,
            Ambience::Cafe => 2,
            Ambience::Ocean => 3,
            Ambience::Fireplace => 4,
            Ambience::Whitenoise => 5,
        }
    }
}

impl fmt::Display for Ambience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ambience {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ambience::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EngineError::UnknownAmbience(s.to_string()))
    }
}
