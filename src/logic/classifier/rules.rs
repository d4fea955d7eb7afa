//! Classifier Bands & Thresholds
//!
//! Constants and config only, no classification logic. Bands are selected
//! by descending feature threshold; each band carries its own confidence
//! range.

use serde::{Deserialize, Serialize};

use super::types::SoundLabel;

// ============================================================================
// BAND THRESHOLDS (feature value, mean absolute amplitude)
// ============================================================================

/// Above this = Chainsaw
pub const CHAINSAW_FEATURE_MIN: f32 = 0.15;

/// Above this (and at or below chainsaw) = Gunshot
pub const GUNSHOT_FEATURE_MIN: f32 = 0.10;

/// Above this (and at or below gunshot) = Fire Crackling; at or below = Forest Ambient
pub const FIRE_FEATURE_MIN: f32 = 0.07;

// ============================================================================
// CONFIDENCE RANGES (uniform, sampled once per classification)
// ============================================================================

pub const CHAINSAW_CONFIDENCE: (f32, f32) = (0.80, 0.95);
pub const GUNSHOT_CONFIDENCE: (f32, f32) = (0.70, 0.88);
pub const FIRE_CONFIDENCE: (f32, f32) = (0.60, 0.82);
pub const AMBIENT_CONFIDENCE: (f32, f32) = (0.80, 0.95);

/// Confidence range for a label's band
pub fn confidence_range(label: SoundLabel) -> (f32, f32) {
    match label {
        SoundLabel::Chainsaw => CHAINSAW_CONFIDENCE,
        SoundLabel::Gunshot => GUNSHOT_CONFIDENCE,
        SoundLabel::FireCrackling => FIRE_CONFIDENCE,
        SoundLabel::ForestAmbient => AMBIENT_CONFIDENCE,
    }
}

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

/// Band boundaries for classification (configurable)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandThresholds {
    /// Above this = Chainsaw
    pub chainsaw_min: f32,
    /// Above this = Gunshot
    pub gunshot_min: f32,
    /// Above this = Fire Crackling, at or below = Forest Ambient
    pub fire_min: f32,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            chainsaw_min: CHAINSAW_FEATURE_MIN,
            gunshot_min: GUNSHOT_FEATURE_MIN,
            fire_min: FIRE_FEATURE_MIN,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
