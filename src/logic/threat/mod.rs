//! Threat Evaluation
//!
//! Decides, from label + confidence, whether a scan is a threat and at
//! what escalation level, and maintains the counters/ledger as it does so.

pub mod evaluator;
pub mod rules;
pub mod types;

pub use evaluator::evaluate;
pub use rules::ThreatRules;
pub use types::{AlertRecord, EscalationLevel, ScanVerdict, ThreatCategory};
