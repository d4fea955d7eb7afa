//! Threat Types
//!
//! Data structures only, no evaluation logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// THREAT CATEGORY
// ============================================================================

/// The hazard classes the sentinel escalates on.
///
/// Labels map to categories through an explicit table (see `rules`), not
/// substring matching, so a label like "Fire Crackling" is a Fire threat by
/// declaration rather than by accident of its spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatCategory {
    Chainsaw,
    Gunshot,
    Explosion,
    Fire,
    Siren,
}

impl ThreatCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatCategory::Chainsaw => "chainsaw",
            ThreatCategory::Gunshot => "gunshot",
            ThreatCategory::Explosion => "explosion",
            ThreatCategory::Fire => "fire",
            ThreatCategory::Siren => "siren",
        }
    }
}

// ============================================================================
// ESCALATION LEVEL
// ============================================================================

/// Severity of one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscalationLevel {
    /// Not a threat
    None,
    /// Threat with moderate confidence
    Medium,
    /// Threat with high confidence; raises the emergency alarm
    High,
}

impl EscalationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EscalationLevel::None => "none",
            EscalationLevel::Medium => "medium",
            EscalationLevel::High => "high",
        }
    }

    pub fn severity(&self) -> u8 {
        match self {
            EscalationLevel::None => 0,
            EscalationLevel::Medium => 1,
            EscalationLevel::High => 2,
        }
    }
}

impl std::fmt::Display for EscalationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ALERT RECORD
// ============================================================================

/// One ledger entry. Created exactly once per threat scan, append-only,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Unique record ID
    pub id: String,
    /// When the scan happened (UTC)
    pub timestamp: DateTime<Utc>,
    /// Region the alert belongs to
    pub region: String,
    /// Display label of the detected sound
    pub label: String,
    /// Rounded confidence, 0-100
    pub confidence_pct: u8,
}

impl AlertRecord {
    pub fn new(timestamp: DateTime<Utc>, region: &str, label: &str, confidence_pct: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            region: region.to_string(),
            label: label.to_string(),
            confidence_pct,
        }
    }
}

// ============================================================================
// SCAN VERDICT
// ============================================================================

/// Outcome of evaluating one scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanVerdict {
    pub is_threat: bool,
    pub level: EscalationLevel,
    /// Category the label maps to, threat or not
    pub category: Option<ThreatCategory>,
}

// ============================================================================
// TESTS
// ============================================================================
