//! Per-provider rate limiting
//!
//! Fixed one-window-per-provider request and token accounting, checked
//! against each provider's static ceiling before a call is attempted.

mod limiter;
mod types;


pub use limiter::RateLimiter;
pub use types::{DEFAULT_WINDOW, WindowSnapshot};
