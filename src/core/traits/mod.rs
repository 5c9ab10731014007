//! Core traits module
//!
//! Contains the seams between the dispatcher and its collaborators

pub mod provider;
pub mod store;

pub use provider::*;
pub use store::*;
