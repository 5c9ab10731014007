//! Test suite for llm-dispatch
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Shared test infrastructure:
//! - Gateway configuration fixtures
//! - Mock vendor servers built on wiremock
//! - Custom assertion macros
//!
//! ### 2. Integration Tests (`integration/`)
//! Tests that drive the public API end to end, with vendors replaced by
//! local mock servers:
//! - Dispatch, fallback and circuit breaking
//! - Vendor wire formats behind a single registry
//! - Storage backends and the daily quota
//! - Configuration loading
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run only unit tests
//! cargo test --lib
//!
//! # Run integration tests
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;
