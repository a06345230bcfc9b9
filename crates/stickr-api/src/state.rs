//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use stickr_core::config::AppConfig;
use stickr_database::Stores;
use stickr_service::{FolderService, StickerService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Selected folder and sticker stores
    pub stores: Stores,
    /// Folder repository
    pub folder_service: Arc<FolderService>,
    /// Sticker repository
    pub sticker_service: Arc<StickerService>,
}

impl AppState {
    /// Wire the services on top of the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let folder_service = Arc::new(FolderService::new(
            Arc::clone(&stores.folders),
            Arc::clone(&stores.stickers),
            config.server.public_url.clone(),
        ));
        let sticker_service = Arc::new(StickerService::new(Arc::clone(&stores.stickers)));

        Self {
            config: Arc::new(config),
            stores,
            folder_service,
            sticker_service,
        }
    }
}
