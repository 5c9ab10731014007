//! Core type definitions
//!
//! Request, response and message shapes shared by every provider adapter,
//! the static rate-limit ceiling each provider advertises, and the records
//! exchanged with the organization and history stores.

pub mod chat;
pub mod history;
pub mod message;
pub mod organization;
pub mod rate_limit;

pub use chat::{ChatRequest, ChatResponse, FinishReason, Usage};
pub use history::{ChatHistoryEntry, DispatchStatus, HistoryMetadata};
pub use message::{ChatMessage, MessageRole};
pub use organization::OrganizationRecord;
pub use rate_limit::RateLimitCeiling;
