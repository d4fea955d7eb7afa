//! Threat Rules & Thresholds
//!
//! Constants, the label -> category table, and the configurable rule set.
//! No evaluation logic here.

use serde::{Deserialize, Serialize};

use super::types::ThreatCategory;
use crate::logic::classifier::SoundLabel;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// A matching label only counts as a threat above this confidence
pub const CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Above this confidence a threat escalates from Medium to High
pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.85;

// ============================================================================
// LABEL -> CATEGORY TABLE
// ============================================================================

/// Which hazard category a classifier label belongs to.
///
/// Declared per label rather than matched by keyword substring:
/// "Fire Crackling" is a Fire threat because this table says so, and a
/// future label that merely contains a hazard word stays benign until it
/// is added here.
pub fn threat_category(label: SoundLabel) -> Option<ThreatCategory> {
    match label {
        SoundLabel::Chainsaw => Some(ThreatCategory::Chainsaw),
        SoundLabel::Gunshot => Some(ThreatCategory::Gunshot),
        SoundLabel::FireCrackling => Some(ThreatCategory::Fire),
        SoundLabel::ForestAmbient => None,
    }
}

// ============================================================================
// CONFIGURABLE RULES (for runtime adjustment)
// ============================================================================

/// Thresholds for threat evaluation (configurable)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThreatRules {
    /// Minimum confidence for a matching label to count as a threat
    pub confidence_min: f32,
    /// Confidence above which a threat escalates to High
    pub high_confidence_min: f32,
}

impl Default for ThreatRules {
    fn default() -> Self {
        Self {
            confidence_min: CONFIDENCE_THRESHOLD,
            high_confidence_min: HIGH_CONFIDENCE_THRESHOLD,
        }
    }
}

impl ThreatRules {
    /// High sensitivity - lower thresholds, more alerts
    pub fn high_sensitivity() -> Self {
        Self {
            confidence_min: 0.5,
            high_confidence_min: 0.75,
        }
    }

    /// Low sensitivity - higher thresholds, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            confidence_min: 0.7,
            high_confidence_min: 0.9,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
