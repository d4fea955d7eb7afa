//! Threat Evaluator
//!
//! Only the evaluate logic lives here - no types, no thresholds.
//! Input: DetectionResult + region + timestamp. Output: ScanVerdict.
//!
//! The evaluator is pure given its state: it mutates the counters and
//! ledger it is handed and nothing else, so tests inject a fresh
//! `EngineState` and assert on exact deltas. The caller holds the state
//! lock for the whole call, which keeps a scan's updates group-atomic.

use chrono::{DateTime, Utc};

use super::rules::{threat_category, ThreatRules};
use super::types::{AlertRecord, EscalationLevel, ScanVerdict};
use crate::logic::classifier::DetectionResult;
use crate::logic::errors::EngineError;
use crate::logic::ledger::EngineState;

/// Evaluate one scan with the default rules
pub fn evaluate(
    result: &DetectionResult,
    region: &str,
    now: DateTime<Utc>,
    state: &mut EngineState,
) -> Result<ScanVerdict, EngineError> {
    evaluate_with_rules(result, region, now, state, &ThreatRules::default())
}

/// Evaluation with custom rules
pub fn evaluate_with_rules(
    result: &DetectionResult,
    region: &str,
    now: DateTime<Utc>,
    state: &mut EngineState,
    rules: &ThreatRules,
) -> Result<ScanVerdict, EngineError> {
    // Reject before any mutation; never clamp.
    if !(0.0..=1.0).contains(&result.confidence) {
        return Err(EngineError::ConfidenceOutOfRange {
            value: result.confidence,
        });
    }

    // Every evaluated scan counts, threat or not.
    state.record_scan();

    let category = threat_category(result.label);
    let is_threat = category.is_some() && result.confidence > rules.confidence_min;

    if !is_threat {
        return Ok(ScanVerdict {
            is_threat: false,
            level: EscalationLevel::None,
            category,
        });
    }

    let level = if result.confidence > rules.high_confidence_min {
        EscalationLevel::High
    } else {
        EscalationLevel::Medium
    };

    state.record_threat(level == EscalationLevel::High);
    state.append_alert(AlertRecord::new(
        now,
        region,
        result.label.as_str(),
        (result.confidence * 100.0).round() as u8,
    ));

    Ok(ScanVerdict {
        is_threat: true,
        level,
        category,
    })
}

// ============================================================================
// TESTS
// ============================================================================
