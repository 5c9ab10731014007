use crate::config::DatabaseConfig;
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmStore};

impl SeaOrmStore {
    /// Connect and bring the schema up to date
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::from_url(&config.url);

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        // Every pooled connection to `sqlite::memory:` would get its own database
        if config.url.contains(":memory:") {
            opt.max_connections(1);
        }

        let db = Database::connect(opt)
            .await
            .map_err(GatewayError::Database)?;
        info!("Database connection established ({:?})", backend_type);

        let store = Self { db, backend_type };
        store.migrate().await?;
        Ok(store)
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            GatewayError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");
        self.db.ping().await.map_err(GatewayError::Database)?;
        Ok(())
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(GatewayError::Database)?;
        Ok(())
    }
}
