//! Circuit breaker implementation for fault tolerance

use super::types::{BreakerEntry, BreakerSnapshot, CircuitBreakerConfig, CircuitState};
use dashmap::DashMap;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Breakers for every provider, created closed on first touch
#[derive(Debug, Default)]
pub struct CircuitBreakers {
    config: CircuitBreakerConfig,
    entries: DashMap<String, BreakerEntry>,
}

impl CircuitBreakers {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    pub fn config(&self) -> &CircuitBreakerConfig {
        &self.config
    }

    /// Current state, with half-open derived from the cooldown
    pub fn state(&self, provider: &str) -> CircuitState {
        let now = Instant::now();
        self.entries
            .get(provider)
            .map(|e| e.observe(now, self.config.cooldown))
            .unwrap_or(CircuitState::Closed)
    }

    /// Whether the provider may be selected; unknown providers are healthy
    pub fn is_healthy(&self, provider: &str) -> bool {
        self.state(provider) != CircuitState::Open
    }

    pub fn record_success(&self, provider: &str) {
        if let Some(mut entry) = self.entries.get_mut(provider) {
            if entry.open {
                debug!(provider, "circuit breaker closed");
            }
            *entry = BreakerEntry::closed();
        }
    }

    pub fn record_failure(&self, provider: &str) {
        let now = Instant::now();
        let mut entry = self
            .entries
            .entry(provider.to_string())
            .or_insert_with(BreakerEntry::closed);

        entry.consecutive_failures = entry.consecutive_failures.saturating_add(1);
        entry.last_failure = Some(now);

        if entry.consecutive_failures >= self.config.failure_threshold {
            if !entry.open {
                warn!(
                    provider,
                    failures = entry.consecutive_failures,
                    "circuit breaker opened"
                );
            }
            entry.open = true;
        }
    }

    pub fn consecutive_failures(&self, provider: &str) -> u32 {
        self.entries
            .get(provider)
            .map(|e| e.consecutive_failures)
            .unwrap_or(0)
    }

    pub fn snapshot(&self, provider: &str) -> BreakerSnapshot {
        BreakerSnapshot {
            state: self.state(provider),
            consecutive_failures: self.consecutive_failures(provider),
        }
    }
}
