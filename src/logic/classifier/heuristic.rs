//! Heuristic Classification
//!
//! Only the classify logic lives here - no types, no thresholds.
//! Input: energy feature. Output: DetectionResult.
//!
//! This is a deterministic band lookup plus one uniform confidence draw,
//! not a trained model. The RNG is a parameter so callers can seed it.

use rand::Rng;

use super::rules::{self, BandThresholds};
use super::types::{DetectionResult, SoundLabel};

/// Classify an energy feature with the default band table
pub fn classify(feature: f32, rng: &mut impl Rng) -> DetectionResult {
    classify_with_thresholds(feature, rng, &BandThresholds::default())
}

/// Classification with custom band boundaries
pub fn classify_with_thresholds(
    feature: f32,
    rng: &mut impl Rng,
    thresholds: &BandThresholds,
) -> DetectionResult {
    let label = if feature > thresholds.chainsaw_min {
        SoundLabel::Chainsaw
    } else if feature > thresholds.gunshot_min {
        SoundLabel::Gunshot
    } else if feature > thresholds.fire_min {
        SoundLabel::FireCrackling
    } else {
        SoundLabel::ForestAmbient
    };

    // Exactly one draw per call; simulated model uncertainty.
    let (lo, hi) = rules::confidence_range(label);
    let confidence = rng.gen_range(lo..=hi);

    DetectionResult { label, confidence }
}

// ============================================================================
// TESTS
// ============================================================================
