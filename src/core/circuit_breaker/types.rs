//! Types and configuration for circuit breaking

use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Circuit breaker state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitState {
    /// Circuit is closed, requests flow normally
    Closed,
    /// Circuit is open, requests are rejected
    Open,
    /// Cooldown elapsed, requests are let through again
    HalfOpen,
}

/// Circuit breaker configuration
#[derive(Debug, Clone, Copy)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures that open the circuit
    pub failure_threshold: u32,
    /// Time since the last failure before the circuit is tried again
    pub cooldown: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            cooldown: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct BreakerEntry {
    pub(super) consecutive_failures: u32,
    pub(super) last_failure: Option<Instant>,
    pub(super) open: bool,
}

impl BreakerEntry {
    pub(super) fn closed() -> Self {
        Self {
            consecutive_failures: 0,
            last_failure: None,
            open: false,
        }
    }

    pub(super) fn observe(&self, now: Instant, cooldown: Duration) -> CircuitState {
        if !self.open {
            return CircuitState::Closed;
        }
        match self.last_failure {
            Some(at) if now.saturating_duration_since(at) > cooldown => CircuitState::HalfOpen,
            _ => CircuitState::Open,
        }
    }
}

/// Point-in-time view of one provider's breaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakerSnapshot {
    pub state: CircuitState,
    pub consecutive_failures: u32,
}
