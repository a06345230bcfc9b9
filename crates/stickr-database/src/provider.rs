//! Store selection based on the configured provider.

use std::sync::Arc;

use tracing::info;

use stickr_core::config::{DatabaseConfig, StoreProvider};
use stickr_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{FolderRepository, StickerRepository};
use crate::store::{FolderStore, StickerStore};

/// The folder and sticker stores picked at startup.
///
/// With the `postgres` provider both stores share one pool, which is kept
/// here so the server can health-check and close it.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Folder table access.
    pub folders: Arc<dyn FolderStore>,
    /// Sticker table access.
    pub stickers: Arc<dyn StickerStore>,
    /// The PostgreSQL pool, absent for the memory provider.
    pub pool: Option<DatabasePool>,
}

impl Stores {
    /// Build the stores selected by `config.provider`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(pool.pool()).await?;
                }
                info!("Using PostgreSQL store");
                Ok(Self {
                    folders: Arc::new(FolderRepository::new(pool.pool().clone())),
                    stickers: Arc::new(StickerRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            StoreProvider::Memory => {
                info!("Using in-memory store");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Both stores backed by one in-memory table set.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            folders: Arc::new(store.clone()),
            stickers: Arc::new(store),
            pool: None,
        }
    }

    /// Whether the backing store answers requests.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release the pool, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
