/// Chat history entity module
pub mod chat_history;
/// Organization entity module
pub mod organization;
/// Subscription tier entity module
pub mod subscription_tier;

pub use chat_history::Entity as ChatHistory;
pub use organization::Entity as Organization;
pub use subscription_tier::Entity as SubscriptionTier;
