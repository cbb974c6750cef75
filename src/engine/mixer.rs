use crate::engine::ambience::{Ambience, ChainSpec};
use crate::engine::chain::build_chain;
use crate::graph::node::{RenderCtx, SignalNode};
use crate::MAX_BLOCK_SIZE;

/// A live synthesis instance: the noise/filter/modulator graph plus
/// the table record it was built from. Dropped as a unit on stop.
pub struct ActiveChain {
    node: Box<dyn SignalNode>,
    spec: ChainSpec,
}

impl ActiveChain {
    pub fn spec(&self) -> &ChainSpec {
        &self.spec
    }
}

/// One ambience channel. The gain survives for the life of the engine;
/// only the chain churns across play/stop cycles. A track is playing
/// exactly when it holds a chain, so "at most one live instance per
/// track" holds by construction.
pub struct Track {
    kind: Ambience,
    gain: f32,
    chain: Option<ActiveChain>,
}

pub const DEFAULT_TRACK_GAIN: f32 = 0.5;
pub const DEFAULT_MASTER_GAIN: f32 = 0.7;

impl Track {
    fn new(kind: Ambience) -> Self {
        Self {
            kind,
            gain: DEFAULT_TRACK_GAIN,
            chain: None,
        }
    }

    pub fn kind(&self) -> Ambience {
        self.kind
    }

    pub fn is_playing(&self) -> bool {
        self.chain.is_some()
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn active_chain(&self) -> Option<&ActiveChain> {
        self.chain.as_ref()
    }
}

/// Render-side state shared with the audio callback: the six tracks,
/// the master gain, and a scratch buffer so per-track rendering does
/// not allocate. Control and render threads take turns under one
/// mutex; blocks are bounded by MAX_BLOCK_SIZE so neither side holds
/// it long.
pub struct Mixer {
    tracks: [Track; Ambience::ALL.len()],
    master_gain: f32,
    sample_rate: f32,
    track_buf: Vec<f32>,
    #[cfg(feature = "rtrb")]
    scope_tx: Option<rtrb::Producer<f32>>,
}

impl Mixer {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            tracks: Ambience::ALL.map(Track::new),
            master_gain: DEFAULT_MASTER_GAIN,
            sample_rate,
            track_buf: vec![0.0; MAX_BLOCK_SIZE],
            #[cfg(feature = "rtrb")]
            scope_tx: None,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn track(&self, kind: Ambience) -> &Track {
        &self.tracks[kind.index()]
    }

    /// Start a kind. Already-playing tracks keep their instance.
    pub fn play(&mut self, kind: Ambience) {
        let track = &mut self.tracks[kind.index()];
        if track.chain.is_some() {
            return;
        }
        track.chain = Some(ActiveChain {
            node: build_chain(kind, self.sample_rate),
            spec: kind.chain_spec(),
        });
    }

    /// Stop a kind, releasing generator, filter and any modulator.
    /// Stopping a stopped track is a no-op.
    pub fn stop(&mut self, kind: Ambience) {
        self.tracks[kind.index()].chain = None;
    }

    pub fn stop_all(&mut self) {
        for track in &mut self.tracks {
            track.chain = None;
        }
    }

    /// Set a track's output gain. Callers validate range; the mixer
    /// applies whatever it is handed, playing or not.
    pub fn set_gain(&mut self, kind: Ambience, gain: f32) {
        self.tracks[kind.index()].gain = gain;
    }

    pub fn master_gain(&self) -> f32 {
        self.master_gain
    }

    pub fn set_master_gain(&mut self, gain: f32) {
        self.master_gain = gain;
    }

    /// Feed rendered output into a ring buffer for visualization.
    /// Pushes are lossy when the consumer lags; render never blocks.
    #[cfg(feature = "rtrb")]
    pub fn set_scope(&mut self, tx: rtrb::Producer<f32>) {
        self.scope_tx = Some(tx);
    }

    /// Mix every playing track into `out`:
    /// `sum(chain * track_gain) * master_gain`.
    ///
    /// `out.len()` must not exceed MAX_BLOCK_SIZE; callers chunk.
    pub fn render_block(&mut self, out: &mut [f32]) {
        let ctx = RenderCtx::new(self.sample_rate);
        out.fill(0.0);

        for track in &mut self.tracks {
            if let Some(active) = track.chain.as_mut() {
                let buf = &mut self.track_buf[..out.len()];
                active.node.render_block(buf, &ctx);

                for (mixed, &sample) in out.iter_mut().zip(buf.iter()) {
                    *mixed += sample * track.gain;
                }
            }
        }

        for sample in out.iter_mut() {
            *sample *= self.master_gain;
        }

        #[cfg(feature = "rtrb")]
        if let Some(tx) = self.scope_tx.as_mut() {
            for &sample in out.iter() {
                let _ = tx.push(sample);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(buffer: &[f32]) -> f32 {
        buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn silent_until_something_plays() {
        let mut mixer = Mixer::new(8_000.0);
        let mut buffer = vec![1.0f32; 256];
        mixer.render_block(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn play_is_idempotent_per_track() {
        let mut mixer = Mixer::new(8_000.0);
        mixer.play(Ambience::Rain);
        let first = &*mixer.track(Ambience::Rain).active_chain().unwrap().node
            as *const dyn SignalNode as *const ();
        mixer.play(Ambience::Rain);
        let second = &*mixer.track(Ambience::Rain).active_chain().unwrap().node
            as *const dyn SignalNode as *const ();
        assert_eq!(first, second, "second play replaced the live instance");
    }

    #[test]
    fn gains_scale_multiplicatively() {
        let mut mixer = Mixer::new(8_000.0);
        mixer.play(Ambience::Whitenoise);

        mixer.set_gain(Ambience::Whitenoise, 1.0);
        mixer.set_master_gain(1.0);
        let mut unity = vec![0.0f32; 1024];
        mixer.render_block(&mut unity);

        mixer.set_gain(Ambience::Whitenoise, 0.5);
        mixer.set_master_gain(0.5);
        let mut scaled = vec![0.0f32; 1024];
        mixer.render_block(&mut scaled);

        // Uniform noise keeps peaks near 1.0 over a 1k-sample window,
        // so quarter gain must show up in the peak.
        assert!(peak(&unity) > 0.8);
        assert!(peak(&scaled) <= 0.25 + 1e-6);
    }

    #[test]
    fn stop_releases_and_silences() {
        let mut mixer = Mixer::new(8_000.0);
        mixer.play(Ambience::Cafe);
        assert!(mixer.track(Ambience::Cafe).is_playing());

        mixer.stop(Ambience::Cafe);
        assert!(!mixer.track(Ambience::Cafe).is_playing());
        assert!(mixer.track(Ambience::Cafe).active_chain().is_none());

        let mut buffer = vec![0.0f32; 256];
        mixer.render_block(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.0));

        // Gain survives the stop.
        mixer.set_gain(Ambience::Cafe, 0.9);
        mixer.stop(Ambience::Cafe);
        assert_eq!(mixer.track(Ambience::Cafe).gain(), 0.9);
    }
}
