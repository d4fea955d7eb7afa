//! Feature Extraction
//!
//! Reduces a raw waveform to the single scalar the classifier consumes:
//! mean absolute amplitude. Pure, no side effects.

use super::audio::Sample;
use super::errors::EngineError;

/// Mean absolute amplitude of the waveform.
///
/// Empty samples are rejected: the mean is undefined and silently mapping
/// it to zero would classify dead input as "Forest Ambient".
pub fn mean_abs_amplitude(sample: &Sample) -> Result<f32, EngineError> {
    if sample.is_empty() {
        return Err(EngineError::EmptySample);
    }
    let sum: f32 = sample.data.iter().map(|v| v.abs()).sum();
    Ok(sum / sample.data.len() as f32)
}

// ============================================================================
// TESTS
// ============================================================================
