//! Database storage implementation using SeaORM
//!
//! Organizations, subscription tiers and chat history, backing the access
//! policy and the dispatcher's history log.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM store implementation module
pub mod seaorm_db;

pub use seaorm_db::{DatabaseBackendType, SeaOrmStore};
