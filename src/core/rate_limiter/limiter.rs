//! Core rate limiter implementation

use super::types::{DEFAULT_WINDOW, RateLimitWindow, WindowSnapshot};
use crate::core::types::RateLimitCeiling;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Fixed-window limiter keyed by provider name
///
/// `admit` only reads (and resets a stale window); usage is added by
/// `record` after a call succeeds, so concurrent admits within one window
/// may overshoot the ceiling by the number of in-flight calls.
#[derive(Debug)]
pub struct RateLimiter {
    windows: DashMap<String, RateLimitWindow>,
    window: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl RateLimiter {
    pub fn new(window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            window,
        }
    }

    /// Whether `provider` may take another request under `ceiling`
    pub fn admit(&self, provider: &str, ceiling: &RateLimitCeiling) -> bool {
        let now = Instant::now();
        let mut entry = match self.windows.entry(provider.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(RateLimitWindow::fresh(now));
                return true;
            }
            Entry::Occupied(occupied) => occupied,
        };

        let window = entry.get_mut();
        if window.is_expired(now, self.window) {
            debug!(provider, "rate limit window reset");
            *window = RateLimitWindow::fresh(now);
            return true;
        }

        window.requests < ceiling.requests_per_minute
            && window.tokens < u64::from(ceiling.tokens_per_minute)
    }

    /// Account one completed request and its actual token usage
    pub fn record(&self, provider: &str, tokens: u32) {
        let now = Instant::now();
        let mut entry = self
            .windows
            .entry(provider.to_string())
            .or_insert_with(|| RateLimitWindow::fresh(now));
        entry.requests = entry.requests.saturating_add(1);
        entry.tokens = entry.tokens.saturating_add(u64::from(tokens));
    }

    /// Requests in the current window; an absent or expired window counts as 0
    pub fn current_requests(&self, provider: &str) -> u32 {
        let now = Instant::now();
        self.windows
            .get(provider)
            .filter(|w| !w.is_expired(now, self.window))
            .map(|w| w.requests)
            .unwrap_or(0)
    }

    /// Usage of the live window, `None` when absent or expired
    pub fn snapshot(&self, provider: &str) -> Option<WindowSnapshot> {
        let now = Instant::now();
        let window = self.windows.get(provider)?;
        if window.is_expired(now, self.window) {
            return None;
        }
        let elapsed = now.saturating_duration_since(window.window_start);
        Some(WindowSnapshot {
            requests: window.requests,
            tokens: window.tokens,
            resets_in_secs: self.window.saturating_sub(elapsed).as_secs(),
        })
    }
}
