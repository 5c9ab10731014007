//! Rate limiter types and data structures

use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Default fixed-window length
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Usage accumulated inside the current window of one provider
#[derive(Debug, Clone, Copy)]
pub(super) struct RateLimitWindow {
    pub(super) requests: u32,
    pub(super) tokens: u64,
    pub(super) window_start: Instant,
}

impl RateLimitWindow {
    pub(super) fn fresh(now: Instant) -> Self {
        Self {
            requests: 0,
            tokens: 0,
            window_start: now,
        }
    }

    /// A window is stale once strictly more than `window` has passed
    pub(super) fn is_expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.window_start) > window
    }
}

/// Read-only view of a provider's window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSnapshot {
    pub requests: u32,
    pub tokens: u64,
    /// Whole seconds left before the window resets
    pub resets_in_secs: u64,
}
