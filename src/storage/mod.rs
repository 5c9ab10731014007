//! Storage layer for the Gateway
//!
//! Backs the organization store and the chat history log, either with a
//! SeaORM database or in process memory.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

pub use database::SeaOrmStore;
pub use memory::MemoryStore;

use crate::config::{SeedConfig, StorageConfig};
use crate::core::traits::{ChatHistoryStore, OrganizationStore};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
enum Backend {
    Memory(Arc<MemoryStore>),
    Database(Arc<SeaOrmStore>),
}

/// Selected storage backend, exposed through the collaborator traits
#[derive(Debug, Clone)]
pub struct StorageLayer {
    backend: Backend,
}

impl StorageLayer {
    /// Create a new storage layer and apply the configured seed data
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        let layer = if config.database.enabled {
            debug!("Connecting to database");
            Self::database(Arc::new(SeaOrmStore::new(&config.database).await?))
        } else {
            debug!("Database disabled, using in-memory storage");
            Self::memory(Arc::new(MemoryStore::new()))
        };

        layer.seed(&config.seed).await?;
        Ok(layer)
    }

    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            backend: Backend::Memory(store),
        }
    }

    pub fn database(store: Arc<SeaOrmStore>) -> Self {
        Self {
            backend: Backend::Database(store),
        }
    }

    /// Backend name, for health reporting
    pub fn backend_name(&self) -> &'static str {
        match &self.backend {
            Backend::Memory(_) => "memory",
            Backend::Database(_) => "database",
        }
    }

    pub fn organizations(&self) -> Arc<dyn OrganizationStore> {
        match &self.backend {
            Backend::Memory(store) => store.clone(),
            Backend::Database(store) => store.clone(),
        }
    }

    pub fn history(&self) -> Arc<dyn ChatHistoryStore> {
        match &self.backend {
            Backend::Memory(store) => store.clone(),
            Backend::Database(store) => store.clone(),
        }
    }

    /// Write seeded tiers and organizations, replacing existing rows
    pub async fn seed(&self, seed: &SeedConfig) -> Result<()> {
        if seed.tiers.is_empty() && seed.organizations.is_empty() {
            return Ok(());
        }

        for tier in &seed.tiers {
            match &self.backend {
                Backend::Memory(store) => {
                    store.set_tier_limit(tier.name.clone(), tier.max_ai_requests_per_day)
                }
                Backend::Database(store) => {
                    store
                        .upsert_tier(&tier.name, tier.max_ai_requests_per_day)
                        .await?
                }
            }
        }

        for organization in &seed.organizations {
            let record = organization.to_record();
            match &self.backend {
                Backend::Memory(store) => store.insert_organization(record),
                Backend::Database(store) => store.upsert_organization(&record).await?,
            }
        }

        info!(
            tiers = seed.tiers.len(),
            organizations = seed.organizations.len(),
            "Seed data applied"
        );
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        match &self.backend {
            Backend::Memory(_) => Ok(()),
            Backend::Database(store) => store.health_check().await,
        }
    }
}
