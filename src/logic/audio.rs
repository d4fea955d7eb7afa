//! Audio Samples & Synthetic Source
//!
//! A `Sample` is a transient waveform: produced by an external audio source
//! (decoded upload or live-mode synthesizer), consumed once by feature
//! extraction, then discarded. Nothing here persists.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{SYNTH_SAMPLE_LEN, SYNTH_SAMPLE_RATE};

/// One audio sample: amplitude values plus the rate they were captured at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Amplitude values, nominally in [-1, 1]
    pub data: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl Sample {
    pub fn new(data: Vec<f32>, sample_rate: u32) -> Self {
        Self { data, sample_rate }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Duration of the waveform in seconds
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.data.len() as f32 / self.sample_rate as f32
    }
}

/// Synthesize one second of random audio for live monitoring.
///
/// The peak amplitude is drawn per call so successive scans sweep the whole
/// classifier range: a peak of `a` gives a mean absolute amplitude near
/// `a / 2`, so peaks in [0.01, 0.40] cover everything from ambient hiss to
/// chainsaw-level energy.
pub fn synthesize(rng: &mut impl Rng) -> Sample {
    let peak: f32 = rng.gen_range(0.01..=0.40);
    let data = (0..SYNTH_SAMPLE_LEN)
        .map(|_| rng.gen_range(-peak..=peak))
        .collect();
    Sample::new(data, SYNTH_SAMPLE_RATE)
}

// ============================================================================
// TESTS
// ============================================================================
