//! Per-provider circuit breaking
//!
//! Consecutive-failure breaker with a fixed cooldown. Half-open is never
//! stored: an open breaker whose cooldown has elapsed is reported as
//! half-open and lets calls through until the next recorded outcome.

mod breaker;
mod types;

#[cfg(test)]
mod tests;

pub use breaker::CircuitBreakers;
pub use types::{BreakerSnapshot, CircuitBreakerConfig, CircuitState};
