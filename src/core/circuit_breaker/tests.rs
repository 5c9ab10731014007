//! Tests for circuit breaking

use super::{CircuitBreakerConfig, CircuitBreakers, CircuitState};
use std::time::Duration;

fn fail(breakers: &CircuitBreakers, provider: &str, times: u32) {
    for _ in 0..times {
        breakers.record_failure(provider);
    }
}

#[tokio::test(start_paused = true)]
async fn test_unknown_provider_is_healthy() {
    let breakers = CircuitBreakers::default();
    assert!(breakers.is_healthy("openai"));
    assert_eq!(breakers.state("openai"), CircuitState::Closed);
    assert_eq!(breakers.consecutive_failures("openai"), 0);
}

#[tokio::test(start_paused = true)]
async fn test_opens_at_threshold() {
    let breakers = CircuitBreakers::default();

    fail(&breakers, "openai", 4);
    assert!(breakers.is_healthy("openai"));
    assert_eq!(breakers.state("openai"), CircuitState::Closed);

    fail(&breakers, "openai", 1);
    assert!(!breakers.is_healthy("openai"));
    assert_eq!(breakers.state("openai"), CircuitState::Open);
}

#[tokio::test(start_paused = true)]
async fn test_half_open_after_cooldown_then_single_trial() {
    let breakers = CircuitBreakers::default();
    fail(&breakers, "openai", 5);

    tokio::time::advance(Duration::from_secs(60)).await;
    assert!(!breakers.is_healthy("openai"));

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(breakers.is_healthy("openai"));
    assert_eq!(breakers.state("openai"), CircuitState::HalfOpen);

    // The trial call fails: straight back to open with a fresh cooldown
    breakers.record_failure("openai");
    assert!(!breakers.is_healthy("openai"));
    assert_eq!(breakers.consecutive_failures("openai"), 6);
}

#[tokio::test(start_paused = true)]
async fn test_success_closes_from_any_state() {
    let breakers = CircuitBreakers::default();

    fail(&breakers, "a", 3);
    breakers.record_success("a");
    assert_eq!(breakers.consecutive_failures("a"), 0);
    assert_eq!(breakers.state("a"), CircuitState::Closed);

    fail(&breakers, "b", 5);
    breakers.record_success("b");
    assert_eq!(breakers.state("b"), CircuitState::Closed);

    fail(&breakers, "c", 5);
    tokio::time::advance(Duration::from_secs(61)).await;
    assert_eq!(breakers.state("c"), CircuitState::HalfOpen);
    breakers.record_success("c");
    assert_eq!(breakers.state("c"), CircuitState::Closed);
    assert_eq!(breakers.consecutive_failures("c"), 0);
}

#[tokio::test(start_paused = true)]
async fn test_is_healthy_does_not_mutate() {
    let breakers = CircuitBreakers::default();
    fail(&breakers, "a", 5);
    tokio::time::advance(Duration::from_secs(61)).await;

    for _ in 0..3 {
        assert!(breakers.is_healthy("a"));
    }
    assert_eq!(breakers.snapshot("a").consecutive_failures, 5);
}

#[tokio::test(start_paused = true)]
async fn test_custom_config() {
    let breakers = CircuitBreakers::new(CircuitBreakerConfig {
        failure_threshold: 2,
        cooldown: Duration::from_secs(5),
    });
    fail(&breakers, "a", 2);
    assert!(!breakers.is_healthy("a"));
    tokio::time::advance(Duration::from_secs(6)).await;
    assert!(breakers.is_healthy("a"));
}
