//! Heuristic Classifier
//!
//! Maps the energy feature into a labeled band with a confidence value
//! drawn from a band-specific range. The randomness simulates model
//! uncertainty and is injected so tests can pin it.

pub mod heuristic;
pub mod rules;
pub mod types;

pub use heuristic::{classify, classify_with_thresholds};
pub use rules::BandThresholds;
pub use types::{DetectionResult, SoundLabel};
