//! Common test utilities for llm-dispatch
//!
//! - `fixtures` - configuration and request factories
//! - `providers` - mock vendor endpoints

pub mod fixtures;
pub mod providers;

pub use fixtures::{ConfigFactory, RequestFactory};
pub use providers::VendorMock;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
