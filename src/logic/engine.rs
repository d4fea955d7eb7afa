//! Sentinel Engine
//!
//! Owns the whole detection pipeline and the session's shared mutable
//! state. One `scan` runs: region validation -> feature extraction ->
//! classification -> evaluation (counters + ledger, group-atomic under a
//! single lock) -> escalation -> notification. No ambient globals: all
//! session state lives in this struct.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use uuid::Uuid;

use super::audio::{self, Sample};
use super::classifier::{self, DetectionResult};
use super::config::EngineConfig;
use super::dispatch::{LogDispatcher, NotificationDispatcher};
use super::errors::EngineError;
use super::escalation::{AlarmState, EscalationMonitor};
use super::features;
use super::ledger::{EngineState, Metrics};
use super::threat::types::{AlertRecord, EscalationLevel, ScanVerdict};
use super::threat::{evaluator, ThreatRules};

/// Confidence reported by the manual "simulate high alert" control
const SIMULATED_CONFIDENCE: f32 = 0.95;

/// Feature value reported by the simulated alert (chainsaw band)
const SIMULATED_FEATURE: f32 = 0.20;

static SESSION_ID: OnceLock<String> = OnceLock::new();

/// Get the session ID (generated once per process run)
pub fn get_session_id() -> String {
    SESSION_ID
        .get_or_init(|| Uuid::new_v4().to_string())
        .clone()
}

// ============================================================================
// SCAN REPORT
// ============================================================================

/// Everything the renderer needs about one completed scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub timestamp: DateTime<Utc>,
    pub region: String,
    /// Mean absolute amplitude the classifier saw
    pub feature: f32,
    pub detection: DetectionResult,
    pub verdict: ScanVerdict,
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct SentinelEngine {
    config: EngineConfig,
    state: Mutex<EngineState>,
    rng: Mutex<StdRng>,
    escalation: EscalationMonitor,
    dispatcher: Box<dyn NotificationDispatcher>,
    started_at: Instant,
}

impl SentinelEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_dispatcher(config, Box::new(LogDispatcher))
    }

    pub fn with_dispatcher(
        config: EngineConfig,
        dispatcher: Box<dyn NotificationDispatcher>,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let escalation = EscalationMonitor::new(Duration::from_millis(config.dwell_ms));

        Ok(Self {
            config,
            state: Mutex::new(EngineState::new()),
            rng: Mutex::new(rng),
            escalation,
            dispatcher,
            started_at: Instant::now(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seconds since the engine was constructed
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn alarm_state(&self) -> AlarmState {
        self.escalation.state()
    }

    /// Consistent read of counters + ledger for the renderer
    pub fn snapshot(&self) -> (Metrics, Vec<AlertRecord>) {
        self.state.lock().snapshot()
    }

    /// Synthesize a live-mode sample from the engine's RNG
    pub fn synthesize_sample(&self) -> Sample {
        let mut rng = self.rng.lock();
        audio::synthesize(&mut *rng)
    }

    fn validate_region(&self, region: &str) -> Result<(), EngineError> {
        if self
            .config
            .regions
            .iter()
            .any(|r| r.eq_ignore_ascii_case(region))
        {
            Ok(())
        } else {
            Err(EngineError::InvalidRegion {
                region: region.to_string(),
            })
        }
    }

    /// Run the full pipeline over one sample.
    ///
    /// Errors leave the counters and ledger untouched; the caller decides
    /// whether to move on (live mode does).
    pub fn scan(&self, sample: &Sample, region: &str) -> Result<ScanReport, EngineError> {
        self.validate_region(region)?;

        let feature = features::mean_abs_amplitude(sample)?;
        let detection = {
            let mut rng = self.rng.lock();
            classifier::classify_with_thresholds(feature, &mut *rng, &self.config.bands)
        };

        self.finish_scan(region, feature, detection)
    }

    /// Manual demo control: record an unconditional High alert.
    ///
    /// Bypasses extraction and classification with a fixed chainsaw-band
    /// detection; everything downstream (counters, ledger, alarm,
    /// notification) runs the normal path.
    pub fn simulate_high_alert(&self, region: &str) -> Result<ScanReport, EngineError> {
        self.validate_region(region)?;

        let detection = DetectionResult {
            label: classifier::SoundLabel::Chainsaw,
            confidence: SIMULATED_CONFIDENCE,
        };
        self.finish_scan(region, SIMULATED_FEATURE, detection)
    }

    /// Shared tail of scan/simulate: evaluate, escalate, notify
    fn finish_scan(
        &self,
        region: &str,
        feature: f32,
        detection: DetectionResult,
    ) -> Result<ScanReport, EngineError> {
        let now = Utc::now();
        let verdict = {
            let mut state = self.state.lock();
            evaluator::evaluate_with_rules(&detection, region, now, &mut state, &self.rules())?
        };

        log::info!(
            "[session {}] scan in {}: feature={:.4} label={} confidence={:.2} level={}",
            get_session_id(),
            region,
            feature,
            detection.label,
            detection.confidence,
            verdict.level
        );

        if verdict.level == EscalationLevel::High {
            self.escalation.trigger();
            let pct = (detection.confidence * 100.0).round() as u8;
            // Fire-and-forget: a dead channel must never fail the scan.
            if let Err(e) = self.dispatcher.notify(region, detection.label.as_str(), pct) {
                log::warn!("Notification dispatch failed (ignored): {}", e);
            }
        }

        Ok(ScanReport {
            timestamp: now,
            region: region.to_string(),
            feature,
            detection,
            verdict,
        })
    }

    fn rules(&self) -> ThreatRules {
        self.config.rules
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dispatch::testing::{CollectingDispatcher, FailingDispatcher};
    use std::sync::Arc;

    fn test_config() -> EngineConfig {
        EngineConfig {
            rng_seed: Some(1234),
            scan_interval_ms: 0,
            dwell_ms: 60_000, // long dwell so the alarm stays up in assertions
            ..Default::default()
        }
    }

    fn loud_sample() -> Sample {
        // Mean absolute amplitude 0.5: chainsaw band.
        Sample::new(vec![0.5; 1_000], 16_000)
    }

    fn quiet_sample() -> Sample {
        // Mean absolute amplitude 0.01: ambient band.
        Sample::new(vec![0.01; 1_000], 16_000)
    }

    #[test]
    fn test_invalid_region_rejected_before_scan() {
        let engine = SentinelEngine::new(test_config()).unwrap();
        let err = engine.scan(&loud_sample(), "Atlantis").unwrap_err();
        assert!(matches!(err, EngineError::InvalidRegion { .. }));
        assert_eq!(engine.snapshot().0.total_scans, 0);
    }

    #[test]
    fn test_region_match_is_case_insensitive() {
        let engine = SentinelEngine::new(test_config()).unwrap();
        assert!(engine.scan(&quiet_sample(), "amazon").is_ok());
    }

    #[test]
    fn test_empty_sample_does_not_count_a_scan() {
        let engine = SentinelEngine::new(test_config()).unwrap();
        let err = engine.scan(&Sample::new(vec![], 16_000), "Assam").unwrap_err();
        assert_eq!(err, EngineError::EmptySample);
        assert_eq!(engine.snapshot().0.total_scans, 0);
    }

    #[test]
    fn test_loud_sample_is_a_chainsaw_threat() {
        let engine = SentinelEngine::new(test_config()).unwrap();
        let report = engine.scan(&loud_sample(), "Assam").unwrap();

        assert_eq!(report.detection.label, classifier::SoundLabel::Chainsaw);
        assert!(report.detection.confidence >= 0.80 && report.detection.confidence <= 0.95);
        assert!(report.verdict.is_threat);

        let (metrics, alerts) = engine.snapshot();
        assert_eq!(metrics.total_scans, 1);
        assert_eq!(metrics.threats_detected, 1);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].region, "Assam");
    }

    #[test]
    fn test_quiet_sample_is_ambient_and_ledger_untouched() {
        let engine = SentinelEngine::new(test_config()).unwrap();
        let report = engine.scan(&quiet_sample(), "Assam").unwrap();

        assert_eq!(report.detection.label, classifier::SoundLabel::ForestAmbient);
        assert!(!report.verdict.is_threat);

        let (metrics, alerts) = engine.snapshot();
        assert_eq!(metrics.total_scans, 1);
        assert_eq!(metrics.threats_detected, 0);
        assert!(alerts.is_empty());
        assert_eq!(engine.alarm_state(), AlarmState::Idle);
    }

    #[test]
    fn test_same_seed_reproduces_the_scan() {
        let a = SentinelEngine::new(test_config()).unwrap();
        let b = SentinelEngine::new(test_config()).unwrap();
        let ra = a.scan(&loud_sample(), "Assam").unwrap();
        let rb = b.scan(&loud_sample(), "Assam").unwrap();
        assert_eq!(ra.detection, rb.detection);
    }

    #[test]
    fn test_simulate_high_alert_records_and_raises_alarm() {
        let engine = SentinelEngine::new(test_config()).unwrap();
        let report = engine.simulate_high_alert("Uttarakhand").unwrap();

        assert_eq!(report.verdict.level, EscalationLevel::High);

        let (metrics, alerts) = engine.snapshot();
        assert_eq!(metrics.total_scans, 1);
        assert_eq!(metrics.threats_detected, 1);
        assert_eq!(metrics.high_alerts, 1);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].label, "Chainsaw");
        assert_eq!(alerts[0].confidence_pct, 95);
        assert_eq!(engine.alarm_state(), AlarmState::Emergency);
    }

    #[test]
    fn test_high_alert_notifies_dispatcher_once() {
        let dispatcher = Arc::new(CollectingDispatcher::default());

        struct Shared(Arc<CollectingDispatcher>);
        impl crate::logic::dispatch::NotificationDispatcher for Shared {
            fn notify(&self, r: &str, l: &str, p: u8) -> Result<(), EngineError> {
                self.0.notify(r, l, p)
            }
        }

        let engine = SentinelEngine::with_dispatcher(
            test_config(),
            Box::new(Shared(Arc::clone(&dispatcher))),
        )
        .unwrap();

        engine.simulate_high_alert("Assam").unwrap();
        engine.scan(&quiet_sample(), "Assam").unwrap();

        let calls = dispatcher.calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Assam");
        assert_eq!(calls[0].2, 95);
    }

    #[test]
    fn test_dispatch_failure_never_fails_the_scan() {
        let engine =
            SentinelEngine::with_dispatcher(test_config(), Box::new(FailingDispatcher)).unwrap();
        let report = engine.simulate_high_alert("Assam").unwrap();
        assert_eq!(report.verdict.level, EscalationLevel::High);
        assert_eq!(engine.snapshot().0.high_alerts, 1);
    }

    #[test]
    fn test_session_id_is_stable() {
        assert_eq!(get_session_id(), get_session_id());
    }
}
