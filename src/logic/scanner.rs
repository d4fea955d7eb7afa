//! Scan Scheduler
//!
//! Two modes, mutually exclusive by construction (both run on the engine's
//! single sequential scan path):
//!
//! - On-demand: exactly one scan for an externally supplied sample.
//! - Live: a bounded batch of N scans over freshly synthesized samples
//!   with a fixed inter-scan delay. This is a batch, not a poller: it
//!   terminates deterministically after N scans and leaves no background
//!   task behind.
//!
//! Partial-failure semantics: a failed scan is logged and skipped, the
//! rest of the batch still runs.

use std::time::Duration;

use serde::Serialize;

use super::audio::Sample;
use super::engine::{ScanReport, SentinelEngine};
use super::errors::EngineError;

/// Outcome of one live batch
#[derive(Debug, Default, Serialize)]
pub struct LiveBatchReport {
    pub completed: usize,
    pub failed: usize,
    pub reports: Vec<ScanReport>,
}

/// On-demand mode: one scan of an uploaded sample
pub fn scan_once(
    engine: &SentinelEngine,
    sample: &Sample,
    region: &str,
) -> Result<ScanReport, EngineError> {
    engine.scan(sample, region)
}

/// Live mode: run the configured bounded batch of synthetic scans
pub async fn run_live_batch(engine: &SentinelEngine, region: &str) -> LiveBatchReport {
    let batch_size = engine.config().live_batch_size;
    let interval = Duration::from_millis(engine.config().scan_interval_ms);
    let mut batch = LiveBatchReport::default();

    log::info!(
        "Live monitoring: {} scans in {}, {:?} apart",
        batch_size,
        region,
        interval
    );

    for i in 0..batch_size {
        let sample = engine.synthesize_sample();
        match engine.scan(&sample, region) {
            Ok(report) => {
                batch.completed += 1;
                batch.reports.push(report);
            }
            Err(e) => {
                // One bad scan does not abort the batch.
                log::warn!("Live scan {}/{} failed: {}", i + 1, batch_size, e);
                batch.failed += 1;
            }
        }

        if i + 1 < batch_size {
            tokio::time::sleep(interval).await;
        }
    }

    log::info!(
        "Live batch finished: {} completed, {} failed",
        batch.completed,
        batch.failed
    );
    batch
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::config::EngineConfig;

    fn seeded_config(seed: u64) -> EngineConfig {
        EngineConfig {
            rng_seed: Some(seed),
            scan_interval_ms: 0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_batch_runs_exactly_n_scans() {
        let engine = SentinelEngine::new(seeded_config(7)).unwrap();
        let batch = run_live_batch(&engine, "Amazon").await;

        assert_eq!(batch.completed, 5);
        assert_eq!(batch.failed, 0);
        assert_eq!(batch.reports.len(), 5);
        assert_eq!(engine.snapshot().0.total_scans, 5);
    }

    #[tokio::test]
    async fn test_ledger_length_matches_threat_count() {
        let engine = SentinelEngine::new(seeded_config(7)).unwrap();
        let batch = run_live_batch(&engine, "Amazon").await;

        let threats = batch.reports.iter().filter(|r| r.verdict.is_threat).count();
        let (metrics, alerts) = engine.snapshot();
        assert_eq!(alerts.len(), threats);
        assert_eq!(metrics.threats_detected as usize, threats);
    }

    #[tokio::test]
    async fn test_seeded_batches_are_reproducible() {
        let run = |seed| async move {
            let engine = SentinelEngine::new(seeded_config(seed)).unwrap();
            let batch = run_live_batch(&engine, "Amazon").await;
            let (_, alerts) = engine.snapshot();
            let detections: Vec<_> = batch
                .reports
                .iter()
                .map(|r| (r.detection.label, r.detection.confidence))
                .collect();
            let ledger: Vec<_> = alerts
                .iter()
                .map(|a| (a.label.clone(), a.confidence_pct))
                .collect();
            (detections, ledger)
        };

        let (det_a, ledger_a) = run(99).await;
        let (det_b, ledger_b) = run(99).await;
        assert_eq!(det_a, det_b);
        assert_eq!(ledger_a, ledger_b);
    }

    #[tokio::test]
    async fn test_failed_scans_do_not_abort_the_batch() {
        let engine = SentinelEngine::new(seeded_config(7)).unwrap();
        // Unknown region: every scan fails, the batch still finishes.
        let batch = run_live_batch(&engine, "Atlantis").await;

        assert_eq!(batch.completed, 0);
        assert_eq!(batch.failed, 5);
        assert_eq!(engine.snapshot().0.total_scans, 0);
    }

    #[test]
    fn test_scan_once_delegates_to_the_engine() {
        let engine = SentinelEngine::new(seeded_config(7)).unwrap();
        let sample = Sample::new(vec![0.5; 100], 16_000);
        let report = scan_once(&engine, &sample, "Assam").unwrap();
        assert!(report.verdict.is_threat);
        assert_eq!(engine.snapshot().0.total_scans, 1);
    }
}
