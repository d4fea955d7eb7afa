//! Classifier Types
//!
//! Data structures only, no classification logic.

use serde::{Deserialize, Serialize};

/// The four sound classes the heuristic can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundLabel {
    /// Mechanical cutting noise, the strongest logging indicator
    Chainsaw,
    /// Short impulsive report, poaching indicator
    Gunshot,
    /// Sustained crackle of burning vegetation
    FireCrackling,
    /// Normal forest background
    ForestAmbient,
}

impl SoundLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundLabel::Chainsaw => "Chainsaw",
            SoundLabel::Gunshot => "Gunshot",
            SoundLabel::FireCrackling => "Fire Crackling",
            SoundLabel::ForestAmbient => "Forest Ambient",
        }
    }
}

impl std::fmt::Display for SoundLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub label: SoundLabel,
    /// Confidence in [0, 1], sampled once per classification
    pub confidence: f32,
}

// ============================================================================
// TESTS
// ============================================================================
