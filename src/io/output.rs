use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::engine::{EngineError, Mixer};
use crate::io::Sink;
use crate::MAX_BLOCK_SIZE;

/// The default output device wrapped as the engine's shared sink.
///
/// The callback chunks the device buffer into blocks of at most
/// MAX_BLOCK_SIZE, renders each through the shared mixer, and mirrors
/// the mono mix to every channel. Suspend/resume map onto pausing and
/// restarting the stream; the mixer (and so every track's chain) is
/// untouched by either.
pub struct CpalOutput {
    stream: cpal::Stream,
    suspended: bool,
}

impl CpalOutput {
    /// Open the default output device, build the shared mixer at the
    /// device sample rate, and start the stream.
    pub fn open() -> Result<(Self, Arc<Mutex<Mixer>>, f32), EngineError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| EngineError::AudioUnavailable("no default output device".into()))?;
        let config = device
            .default_output_config()
            .map_err(|e| EngineError::AudioUnavailable(format!("no default output config: {e}")))?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let mixer = Arc::new(Mutex::new(Mixer::new(sample_rate)));
        let shared = Arc::clone(&mixer);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    let mut mixer = shared.lock().unwrap();
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames];
                        mixer.render_block(block);

                        // Mono mix to all channels.
                        let out_off = frames_written * channels;
                        for (i, &sample) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = sample;
                            }
                        }

                        frames_written += frames;
                    }
                },
                |err| eprintln!("audio stream error: {err}"),
                None,
            )
            .map_err(|e| EngineError::AudioUnavailable(format!("failed to build stream: {e}")))?;

        stream
            .play()
            .map_err(|e| EngineError::AudioUnavailable(format!("failed to start stream: {e}")))?;

        Ok((
            Self {
                stream,
                suspended: false,
            },
            mixer,
            sample_rate,
        ))
    }
}

impl Sink for CpalOutput {
    fn resume(&mut self) -> Result<(), EngineError> {
        self.stream
            .play()
            .map_err(|e| EngineError::AudioUnavailable(format!("failed to resume stream: {e}")))?;
        self.suspended = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<(), EngineError> {
        self.stream
            .pause()
            .map_err(|e| EngineError::AudioUnavailable(format!("failed to pause stream: {e}")))?;
        self.suspended = true;
        Ok(())
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }
}
