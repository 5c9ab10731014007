//! Organization access policy
//!
//! Decides whether an organization may issue another AI request, from its
//! subscription status, end date and the daily ceiling of its tier.

mod policy;
mod types;


pub use policy::AccessPolicy;
pub use types::{AccessError, utc_day_bounds};
