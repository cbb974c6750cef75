use rand::{rngs::SmallRng, Rng, SeedableRng};

/*
Looping Noise Buffer
====================

Every ambience in the engine starts from the same raw material: white
noise, equal energy at all frequencies. Rather than running a PRNG per
sample on the render thread, the buffer is filled once at chain build
time and replayed with a wrapping cursor.

The loop seam is masked downstream: each chain runs the buffer through
a fixed (or slowly swept) filter, so the two-second repeat is
inaudible. A fresh buffer is generated for every play, so two plays of
the same ambience never share a noise bed.
*/

pub struct NoiseLoop {
    buffer: Vec<f32>,
    position: usize,
}

impl NoiseLoop {
    /// Fill a loop of `seconds` worth of uniform samples in [-1, 1].
    ///
    /// The length in samples is `round(seconds * sample_rate)`, clamped
    /// to at least one sample so degenerate durations cannot produce an
    /// empty (division-by-zero on wrap) buffer.
    pub fn with_duration(seconds: f32, sample_rate: f32) -> Self {
        let samples = (seconds * sample_rate).round().max(1.0) as usize;
        let mut rng = SmallRng::from_entropy();
        let buffer = (0..samples).map(|_| rng.gen_range(-1.0..=1.0)).collect();

        Self {
            buffer,
            position: 0,
        }
    }

    /// Number of samples in one loop.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Copy the next `out.len()` samples, wrapping at the loop point.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.buffer[self.position];
            self.position += 1;
            if self.position == self.buffer.len() {
                self.position = 0;
            }
        }
    }
}
