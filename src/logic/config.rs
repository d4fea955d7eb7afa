//! Engine Configuration
//!
//! All tunables in one struct. Defaults come from `constants`; the demo
//! values (5-scan batch, 1 s spacing, 5 s dwell) are configuration, not
//! literals buried in the scheduler.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::classifier::BandThresholds;
use crate::logic::errors::EngineError;
use crate::logic::threat::ThreatRules;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Regions the sentinel accepts scans for
    pub regions: Vec<String>,
    /// Number of scans in one live-monitoring batch
    pub live_batch_size: usize,
    /// Delay between live-mode scans (ms)
    pub scan_interval_ms: u64,
    /// Emergency dwell before the alarm auto-resets (ms)
    pub dwell_ms: u64,
    /// Fixed RNG seed for reproducible runs; None = entropy
    pub rng_seed: Option<u64>,
    /// Classifier band boundaries
    pub bands: BandThresholds,
    /// Threat evaluation thresholds
    pub rules: ThreatRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            regions: constants::DEFAULT_REGIONS.clone(),
            live_batch_size: constants::DEFAULT_LIVE_BATCH_SIZE,
            scan_interval_ms: constants::DEFAULT_SCAN_INTERVAL_MS,
            dwell_ms: constants::DEFAULT_DWELL_MS,
            rng_seed: None,
            bands: BandThresholds::default(),
            rules: ThreatRules::default(),
        }
    }
}

impl EngineConfig {
    /// Build a config from environment overrides (see `constants`)
    pub fn from_env() -> Self {
        let rules = match constants::get_sensitivity().as_str() {
            "high" => ThreatRules::high_sensitivity(),
            "low" => ThreatRules::low_sensitivity(),
            _ => ThreatRules::default(),
        };

        Self {
            live_batch_size: constants::get_live_batch_size(),
            scan_interval_ms: constants::get_scan_interval_ms(),
            dwell_ms: constants::get_dwell_ms(),
            rng_seed: constants::get_rng_seed(),
            rules,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.regions.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "no monitored regions configured".to_string(),
            });
        }
        if self.live_batch_size == 0 {
            return Err(EngineError::InvalidConfig {
                message: "live batch size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
