use sea_orm::DatabaseConnection;

/// SeaORM-backed organization and history store
#[derive(Debug, Clone)]
pub struct SeaOrmStore {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("sqlite") {
            DatabaseBackendType::SQLite
        } else {
            DatabaseBackendType::PostgreSQL
        }
    }
}
