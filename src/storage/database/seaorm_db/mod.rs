// Module declarations
mod chat_history_ops;
mod connection;
mod organization_ops;
mod types;


// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmStore};
