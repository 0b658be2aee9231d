// ============================================================================
// Submission Cooldown Limiter
// ============================================================================
//
// In-memory, per-origin cooldown gate for form submissions: one accepted
// submission per origin per window. Expired entries are swept on every
// check, so the map stays bounded without a background task.
//
// State lives in this process only and is rebuilt empty on restart; the
// cooldown is best-effort throttling, not a durable quota.
//
// ============================================================================

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Outcome of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// No active cooldown for this origin; the submission may proceed.
    Allowed,
    /// The origin submitted within the window; whole seconds left to wait.
    Denied { retry_after_secs: u64 },
}

/// Per-origin cooldown tracker.
///
/// The map is guarded by one coarse lock: request volume is a handful of
/// contact-form posts, so per-key locking would buy nothing. The lock is
/// never held across the relay call.
pub struct CooldownLimiter {
    window: Duration,
    records: Mutex<HashMap<String, Instant>>,
}

impl CooldownLimiter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether `origin_id` may submit right now.
    ///
    /// A check alone never starts a cooldown; call [`record`](Self::record)
    /// once the relay confirms delivery. Every call also sweeps entries
    /// older than the window, which bounds the map by the number of
    /// distinct origins seen within one window.
    pub async fn check(&self, origin_id: &str) -> RateDecision {
        let mut records = self.records.lock().await;
        Self::sweep(&mut records, self.window);

        match records.get(origin_id) {
            Some(last) => {
                let elapsed = last.elapsed();
                if elapsed < self.window {
                    RateDecision::Denied {
                        retry_after_secs: retry_after_secs(self.window - elapsed),
                    }
                } else {
                    RateDecision::Allowed
                }
            }
            None => RateDecision::Allowed,
        }
    }

    /// Start (or restart) the cooldown for `origin_id` at the current
    /// instant. Called only for submissions the relay accepted, so failed
    /// attempts never cost the caller their slot.
    pub async fn record(&self, origin_id: &str) {
        let mut records = self.records.lock().await;
        records.insert(origin_id.to_string(), Instant::now());
    }

    /// Drop every entry whose age exceeds the window.
    fn sweep(records: &mut HashMap<String, Instant>, window: Duration) {
        records.retain(|_, last| last.elapsed() <= window);
    }
}

/// Whole seconds until a cooldown with `remaining` time expires, rounded up
/// and never zero, so callers can always display "wait N seconds".
fn retry_after_secs(remaining: Duration) -> u64 {
    (remaining.as_millis() as u64).div_ceil(1000).max(1)
}
