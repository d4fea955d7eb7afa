//! Metrics & Alert Ledger
//!
//! Process-lifetime counters plus the append-only alert history. All three
//! counters and the ledger live in one `EngineState` so a scan's updates
//! happen as a group under a single lock acquisition; readers get a
//! consistent snapshot, never a partial update.
//!
//! Nothing here is persisted; everything resets at process start.

use serde::{Deserialize, Serialize};

use super::threat::types::AlertRecord;

// ============================================================================
// METRICS
// ============================================================================

/// Monotone scan counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Every completed scan, threat or not
    pub total_scans: u64,
    /// Scans judged a threat
    pub threats_detected: u64,
    /// Threat scans that escalated to High
    pub high_alerts: u64,
}

// ============================================================================
// ENGINE STATE
// ============================================================================

/// The single shared mutable resource of the engine: counters + ledger.
///
/// All mutation goes through the methods below; the engine holds this
/// behind one exclusive lock.
#[derive(Debug, Default)]
pub struct EngineState {
    metrics: Metrics,
    alerts: Vec<AlertRecord>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed scan
    pub fn record_scan(&mut self) {
        self.metrics.total_scans += 1;
    }

    /// Count one threat scan, optionally a High escalation
    pub fn record_threat(&mut self, high_severity: bool) {
        self.metrics.threats_detected += 1;
        if high_severity {
            self.metrics.high_alerts += 1;
        }
    }

    /// Append to the ledger. Records are never mutated or removed.
    pub fn append_alert(&mut self, record: AlertRecord) {
        self.alerts.push(record);
    }

    /// Consistent read of counters + ledger, in append order
    pub fn snapshot(&self) -> (Metrics, Vec<AlertRecord>) {
        (self.metrics, self.alerts.clone())
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(label: &str) -> AlertRecord {
        AlertRecord::new(Utc::now(), "Assam", label, 90)
    }

    #[test]
    fn test_counters_start_at_zero() {
        let state = EngineState::new();
        assert_eq!(state.metrics(), Metrics::default());
        assert_eq!(state.alert_count(), 0);
    }

    #[test]
    fn test_counter_invariants_hold() {
        let mut state = EngineState::new();
        state.record_scan();
        state.record_scan();
        state.record_threat(false);
        state.record_scan();
        state.record_threat(true);

        let m = state.metrics();
        assert_eq!(m.total_scans, 3);
        assert_eq!(m.threats_detected, 2);
        assert_eq!(m.high_alerts, 1);
        assert!(m.threats_detected <= m.total_scans);
        assert!(m.high_alerts <= m.threats_detected);
    }

    #[test]
    fn test_ledger_preserves_append_order() {
        let mut state = EngineState::new();
        state.append_alert(record("Chainsaw"));
        state.append_alert(record("Gunshot"));
        state.append_alert(record("Chainsaw"));

        let (_, alerts) = state.snapshot();
        let labels: Vec<&str> = alerts.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Chainsaw", "Gunshot", "Chainsaw"]);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut state = EngineState::new();
        state.record_scan();
        state.record_threat(true);
        state.append_alert(record("Chainsaw"));

        let (m1, a1) = state.snapshot();
        let (m2, a2) = state.snapshot();
        assert_eq!(m1, m2);
        assert_eq!(a1.len(), a2.len());
        assert_eq!(a1[0].id, a2[0].id);
    }
}
