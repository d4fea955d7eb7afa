//! Notification Dispatch
//!
//! Secondary side effect of a High escalation: "send the ranger an email,
//! sound the siren". There is no real delivery channel here; the default
//! dispatcher just logs the simulated send. The engine treats dispatch as
//! fire-and-forget: a dispatcher error is logged and ignored, it never
//! fails the scan and is never retried.

use crate::logic::errors::EngineError;

/// External alert channel, invoked once per High escalation
pub trait NotificationDispatcher: Send + Sync {
    fn notify(&self, region: &str, label: &str, confidence_pct: u8) -> Result<(), EngineError>;
}

/// Default dispatcher: logs the simulated email/siren send
pub struct LogDispatcher;

impl NotificationDispatcher for LogDispatcher {
    fn notify(&self, region: &str, label: &str, confidence_pct: u8) -> Result<(), EngineError> {
        log::warn!(
            "[ALERT DISPATCH] HIGH ALERT: {} detected in {} ({}% confidence) - email notification sent (simulated)",
            label,
            region,
            confidence_pct
        );
        Ok(())
    }
}

// ============================================================================
// TEST DISPATCHERS
// ============================================================================


// ============================================================================
// TESTS
// ============================================================================
