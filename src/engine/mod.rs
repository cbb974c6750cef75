//! The ambient signal engine: six fixed tracks, each a looped-noise
//! synthesis chain behind a persistent gain, mixed through one master
//! gain into the shared realtime sink.

pub mod ambience;
pub mod chain;
pub mod mixer;

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::io::Sink;

pub use ambience::{Ambience, ChainSpec, FilterSpec, SwellSpec};
pub use chain::build_chain;
pub use mixer::{ActiveChain, Mixer, Track};

#[derive(Debug, Error)]
pub enum EngineError {
    /// The shared output cannot be created or resumed. Playback
    /// no-ops; the affected track stays stopped.
    #[error("audio output unavailable: {0}")]
    AudioUnavailable(String),
    /// Volume outside [0, 1]. Rejected; the prior value is retained.
    #[error("volume {0} is outside [0.0, 1.0]")]
    InvalidVolume(f32),
    /// Name outside the fixed ambience set. No state change.
    #[error("unknown ambience {0:?}")]
    UnknownAmbience(String),
}

fn validate_volume(volume: f32) -> Result<(), EngineError> {
    if (0.0..=1.0).contains(&volume) {
        Ok(())
    } else {
        Err(EngineError::InvalidVolume(volume))
    }
}

/// Control surface over the mixer and the shared sink. Constructed
/// once at startup and handed to whatever drives it; all control
/// operations run on the caller's thread, while the render thread
/// only ever sees the mixer through the shared mutex.
pub struct Engine {
    mixer: Arc<Mutex<Mixer>>,
    sink: Box<dyn Sink>,
    sample_rate: f32,
}

impl Engine {
    /// Open the default output device and start rendering into it.
    pub fn open() -> Result<Self, EngineError> {
        let (output, mixer, sample_rate) = crate::io::output::CpalOutput::open()?;
        Ok(Self {
            mixer,
            sink: Box::new(output),
            sample_rate,
        })
    }

    /// Engine with a caller-supplied sink (offline rendering, tests).
    pub fn with_sink(sample_rate: f32, sink: Box<dyn Sink>) -> Self {
        Self {
            mixer: Arc::new(Mutex::new(Mixer::new(sample_rate))),
            sink,
            sample_rate,
        }
    }

    /// Engine with no output device at all; blocks are rendered by
    /// locking the mixer directly.
    pub fn offline(sample_rate: f32) -> Self {
        Self::with_sink(sample_rate, Box::new(crate::io::OfflineSink::new()))
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn mixer(&self) -> Arc<Mutex<Mixer>> {
        Arc::clone(&self.mixer)
    }

    /// Start one ambience. No-op if it is already playing. Fails with
    /// `AudioUnavailable` (and no state change) when the sink cannot
    /// produce output at all.
    pub fn play(&mut self, kind: Ambience) -> Result<(), EngineError> {
        if !self.sink.is_available() {
            return Err(EngineError::AudioUnavailable(
                "no usable output sink".into(),
            ));
        }
        self.mixer.lock().unwrap().play(kind);
        Ok(())
    }

    /// Stop one ambience, releasing its chain. Idempotent.
    pub fn stop(&mut self, kind: Ambience) {
        self.mixer.lock().unwrap().stop(kind);
    }

    /// Flip one ambience between playing and stopped, first making
    /// sure the shared output is running: a suspended sink is resumed
    /// (blocking until the resume completes) before any state changes.
    /// Returns whether the track is playing afterwards.
    pub fn toggle(&mut self, kind: Ambience) -> Result<bool, EngineError> {
        if self.sink.is_suspended() {
            self.sink.resume()?;
        }

        if self.is_playing(kind) {
            self.stop(kind);
            Ok(false)
        } else {
            self.play(kind)?;
            Ok(true)
        }
    }

    /// Stop every playing track. All tracks are stopped on return.
    pub fn stop_all(&mut self) {
        self.mixer.lock().unwrap().stop_all();
    }

    /// Set one track's output gain. Applies immediately, playing or
    /// not. Out-of-range values (NaN included) are rejected and the
    /// prior volume kept.
    pub fn set_volume(&mut self, kind: Ambience, volume: f32) -> Result<(), EngineError> {
        validate_volume(volume)?;
        self.mixer.lock().unwrap().set_gain(kind, volume);
        Ok(())
    }

    /// Set the shared gain applied after all per-track gains.
    pub fn set_master_volume(&mut self, volume: f32) -> Result<(), EngineError> {
        validate_volume(volume)?;
        self.mixer.lock().unwrap().set_master_gain(volume);
        Ok(())
    }

    pub fn is_playing(&self, kind: Ambience) -> bool {
        self.mixer.lock().unwrap().track(kind).is_playing()
    }

    pub fn volume(&self, kind: Ambience) -> f32 {
        self.mixer.lock().unwrap().track(kind).gain()
    }

    pub fn master_volume(&self) -> f32 {
        self.mixer.lock().unwrap().master_gain()
    }

    /// The chain table record behind a track's live instance, if any.
    pub fn active_spec(&self, kind: Ambience) -> Option<ChainSpec> {
        self.mixer
            .lock()
            .unwrap()
            .track(kind)
            .active_chain()
            .map(|chain| *chain.spec())
    }

    /// Suspend the shared output wholesale. Tracks keep their chains
    /// and stay logically playing; they just produce no sound.
    pub fn suspend(&mut self) -> Result<(), EngineError> {
        self.sink.suspend()
    }

    /// Resume the shared output. Playing tracks become audible again
    /// without re-triggering play.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        self.sink.resume()
    }

    pub fn is_suspended(&self) -> bool {
        self.sink.is_suspended()
    }

    /// Tap the mixed output into a ring buffer for visualization.
    #[cfg(feature = "rtrb")]
    pub fn set_scope(&self, tx: rtrb::Producer<f32>) {
        self.mixer.lock().unwrap().set_scope(tx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_validation_covers_the_unit_interval() {
        assert!(validate_volume(0.0).is_ok());
        assert!(validate_volume(1.0).is_ok());
        assert!(validate_volume(0.5).is_ok());
        assert!(matches!(
            validate_volume(-0.01),
            Err(EngineError::InvalidVolume(_))
        ));
        assert!(matches!(
            validate_volume(1.01),
            Err(EngineError::InvalidVolume(_))
        ));
        assert!(matches!(
            validate_volume(f32::NAN),
            Err(EngineError::InvalidVolume(_))
        ));
    }
}
