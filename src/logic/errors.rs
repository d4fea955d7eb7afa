//! Engine Error Taxonomy
//!
//! Every fallible core operation returns one of these. Errors are never
//! retried internally; a failed scan is surfaced to the caller and the
//! scheduler moves on to the next scan.

use serde::Serialize;

/// Errors produced by the detection engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EngineError {
    /// Feature extraction was given a zero-length waveform.
    /// The mean amplitude is undefined, so this is rejected instead of
    /// coerced to zero.
    EmptySample,
    /// Classifier confidence left the [0, 1] interval. Structurally
    /// impossible with the fixed band ranges, but the evaluator rejects it
    /// rather than clamping.
    ConfidenceOutOfRange { value: f32 },
    /// Region is not in the configured monitoring set; rejected before the
    /// scan begins.
    InvalidRegion { region: String },
    /// Engine configuration failed validation at construction time.
    InvalidConfig { message: String },
    /// Notification dispatch failed. Swallowed at the engine boundary,
    /// never fails a scan.
    DispatchFailed { message: String },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::EmptySample => {
                write!(f, "cannot extract features from an empty sample")
            }
            EngineError::ConfidenceOutOfRange { value } => {
                write!(f, "classifier confidence {} outside [0, 1]", value)
            }
            EngineError::InvalidRegion { region } => {
                write!(f, "region '{}' is not in the monitored set", region)
            }
            EngineError::InvalidConfig { message } => {
                write!(f, "invalid engine config: {}", message)
            }
            EngineError::DispatchFailed { message } => {
                write!(f, "notification dispatch failed: {}", message)
            }
        }
    }
}

impl std::error::Error for EngineError {}

// ============================================================================
// TESTS
// ============================================================================
