//! Integration tests for llm-dispatch
//!
//! Drive the public API with vendors replaced by local mock servers.

pub mod config_tests;
pub mod dispatch_tests;
pub mod provider_tests;
pub mod storage_tests;
