//! Escalation State Machine
//!
//! Two states: Idle and Emergency. A High-level scan (or a manual
//! simulation) raises Emergency; a timer resets it to Idle after a fixed
//! dwell with no external input.
//!
//! The reset is a detached delayed task guarded by a generation counter:
//! each trigger bumps the generation and arms a fresh timer, and a timer
//! only resets the alarm if its generation is still current. A newer High
//! event therefore re-arms the dwell and stale timers fire as no-ops. The
//! timer touches only the alarm flag, never the scan counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Alarm state shown to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmState {
    Idle,
    Emergency,
}

impl AlarmState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlarmState::Idle => "idle",
            AlarmState::Emergency => "emergency",
        }
    }
}

struct MonitorInner {
    state: Mutex<AlarmState>,
    generation: AtomicU64,
    dwell: Duration,
}

/// Handle to the alarm; clones share the same state
#[derive(Clone)]
pub struct EscalationMonitor {
    inner: Arc<MonitorInner>,
}

impl EscalationMonitor {
    pub fn new(dwell: Duration) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                state: Mutex::new(AlarmState::Idle),
                generation: AtomicU64::new(0),
                dwell,
            }),
        }
    }

    pub fn state(&self) -> AlarmState {
        *self.inner.state.lock()
    }

    pub fn is_emergency(&self) -> bool {
        self.state() == AlarmState::Emergency
    }

    /// Raise Emergency and arm the auto-reset timer.
    ///
    /// Fire-and-forget: the timer thread is detached and the caller never
    /// waits on it.
    pub fn trigger(&self) {
        let generation = {
            let mut state = self.inner.state.lock();
            *state = AlarmState::Emergency;
            // Bump while holding the lock so the armed generation matches
            // the state transition it belongs to.
            self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        log::warn!("Emergency raised (generation {})", generation);

        let inner = Arc::clone(&self.inner);
        thread::spawn(move || {
            thread::sleep(inner.dwell);
            let mut state = inner.state.lock();
            if inner.generation.load(Ordering::SeqCst) == generation {
                *state = AlarmState::Idle;
                log::info!("Emergency dwell elapsed, alarm reset to idle");
            }
            // Otherwise a newer trigger re-armed the dwell; nothing to do.
        });
    }
}

// ============================================================================
// TESTS
// ============================================================================
