// Purpose - the shared realtime audio sink and its implementations.

pub mod output;

use crate::engine::EngineError;

/// The shared realtime output the engine renders into. One sink per
/// engine; suspend/resume act on all tracks wholesale. `resume` is
/// synchronous: when it returns Ok the output is running, which is
/// what lets a gated toggle proceed immediately afterwards.
pub trait Sink {
    fn resume(&mut self) -> Result<(), EngineError>;

    fn suspend(&mut self) -> Result<(), EngineError>;

    fn is_suspended(&self) -> bool;

    /// Whether the sink can produce output at all. Play commands
    /// no-op with `AudioUnavailable` against an unavailable sink.
    fn is_available(&self) -> bool {
        true
    }
}

/// Sink with no device behind it. Tracks the suspend flag so the
/// playback state machine behaves identically to a real output;
/// callers render by locking the mixer themselves.
pub struct OfflineSink {
    suspended: bool,
    available: bool,
}

impl OfflineSink {
    pub fn new() -> Self {
        Self {
            suspended: false,
            available: true,
        }
    }

    /// A sink that reports the output device as unusable, for
    /// exercising the `AudioUnavailable` paths.
    pub fn unavailable() -> Self {
        Self {
            suspended: false,
            available: false,
        }
    }
}

impl Default for OfflineSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for OfflineSink {
    fn resume(&mut self) -> Result<(), EngineError> {
        if !self.available {
            return Err(EngineError::AudioUnavailable(
                "offline sink marked unavailable".into(),
            ));
        }
        self.suspended = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<(), EngineError> {
        if !self.available {
            return Err(EngineError::AudioUnavailable(
                "offline sink marked unavailable".into(),
            ));
        }
        self.suspended = true;
        Ok(())
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_sink_tracks_suspension() {
        let mut sink = OfflineSink::new();
        assert!(!sink.is_suspended());

        sink.suspend().unwrap();
        assert!(sink.is_suspended());

        sink.resume().unwrap();
        assert!(!sink.is_suspended());
    }

    #[test]
    fn unavailable_sink_refuses_resume() {
        let mut sink = OfflineSink::unavailable();
        assert!(!sink.is_available());
        assert!(matches!(
            sink.resume(),
            Err(EngineError::AudioUnavailable(_))
        ));
    }
}
