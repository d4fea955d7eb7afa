//! Central Configuration Constants
//!
//! Single source of truth for all engine defaults.
//! To change a default (batch size, dwell time, regions), only edit this file.

use once_cell::sync::Lazy;

/// App name
pub const APP_NAME: &str = "Bio-Acoustic Sentinel";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of scans in one live-monitoring batch
pub const DEFAULT_LIVE_BATCH_SIZE: usize = 5;

/// Default delay between two live-mode scans (milliseconds)
pub const DEFAULT_SCAN_INTERVAL_MS: u64 = 1_000;

/// Default emergency dwell time before the alarm auto-resets (milliseconds)
pub const DEFAULT_DWELL_MS: u64 = 5_000;

/// Length of a synthesized live-mode waveform (samples)
pub const SYNTH_SAMPLE_LEN: usize = 16_000;

/// Sample rate of synthesized live-mode audio (Hz)
pub const SYNTH_SAMPLE_RATE: u32 = 16_000;

/// Forest regions the sentinel is allowed to monitor
pub static DEFAULT_REGIONS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "Uttarakhand",
        "Assam",
        "Amazon",
        "Sundarbans",
        "Western Ghats",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get live batch size from environment or use default
pub fn get_live_batch_size() -> usize {
    std::env::var("SENTINEL_LIVE_BATCH_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LIVE_BATCH_SIZE)
}

/// Get inter-scan delay (ms) from environment or use default
pub fn get_scan_interval_ms() -> u64 {
    std::env::var("SENTINEL_SCAN_INTERVAL_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SCAN_INTERVAL_MS)
}

/// Get emergency dwell time (ms) from environment or use default
pub fn get_dwell_ms() -> u64 {
    std::env::var("SENTINEL_DWELL_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DWELL_MS)
}

/// Get optional RNG seed from environment (set for reproducible runs)
pub fn get_rng_seed() -> Option<u64> {
    std::env::var("SENTINEL_RNG_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
}

/// Get sensitivity profile name from environment ("high", "low" or "default")
pub fn get_sensitivity() -> String {
    std::env::var("SENTINEL_SENSITIVITY").unwrap_or_else(|_| "default".to_string())
}
