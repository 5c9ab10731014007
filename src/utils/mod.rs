//! Utility modules
//!
//! - **error**: crate-wide error type and its HTTP mapping
//! - **logging**: tracing subscriber initialization

pub mod error;
pub mod logging;
