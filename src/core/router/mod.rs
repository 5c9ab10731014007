//! Provider selection and request dispatch
//!
//! - `state` - process-wide dispatch context (registry, rate windows, breakers)
//! - `selection` - eligible-provider filtering and least-loaded ordering
//! - `dispatcher` - access check, fallback loop and history logging

pub mod dispatcher;
pub mod selection;
pub mod state;

#[cfg(test)]
mod tests;

pub use dispatcher::Dispatcher;
pub use state::DispatchState;
