//! Bio-Acoustic Sentinel - Main Entry Point
//!
//! Starts the detection engine and runs one live-monitoring batch over
//! synthetic audio, then writes the alert report. Dashboard rendering is a
//! separate front-end; this binary is the core service.

mod constants;
mod logic;

use logic::config::EngineConfig;
use logic::engine::{self, SentinelEngine};
use logic::{report, scanner};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{} (session {})",
        constants::APP_NAME,
        constants::APP_VERSION,
        engine::get_session_id()
    );

    let config = EngineConfig::from_env();
    let engine = match SentinelEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Engine startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let region = engine.config().regions[0].clone();
    log::info!("Monitoring region: {}", region);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    let batch = rt.block_on(scanner::run_live_batch(&engine, &region));

    let (metrics, alerts) = engine.snapshot();
    log::info!(
        "Session totals after {}s: scans={} threats={} high_alerts={} alarm={}",
        engine.uptime_secs(),
        metrics.total_scans,
        metrics.threats_detected,
        metrics.high_alerts,
        engine.alarm_state().as_str()
    );

    if batch.failed > 0 {
        log::warn!("{} scan(s) failed during the live batch", batch.failed);
    }

    if !alerts.is_empty() {
        let path = std::path::Path::new("alert_report.txt");
        let title = format!("{} Alert Report", constants::APP_NAME);
        match report::export_to_file(path, &title, &alerts) {
            Ok(count) => log::info!("Wrote {} alert(s) to {}", count, path.display()),
            Err(e) => log::error!("Report export failed: {}", e),
        }
    }
}
