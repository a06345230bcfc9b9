//! In-memory folder and sticker tables.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use stickr_core::error::AppError;
use stickr_core::result::AppResult;
use stickr_core::types::{FolderId, StickerId};
use stickr_entity::folder::{CreateFolder, Folder};
use stickr_entity::sticker::{CreateSticker, Sticker};

use crate::store::{FolderStore, StickerStore};

#[derive(Debug, Default)]
struct Tables {
    folders: HashMap<FolderId, Folder>,
    /// Kept in insertion order, which breaks `created_at` ties.
    stickers: Vec<Sticker>,
}

/// Both tables behind one lock, with the same uniqueness and
/// foreign-key behavior as the PostgreSQL schema.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sticker rows across all folders.
    pub async fn sticker_count(&self) -> usize {
        self.tables.read().await.stickers.len()
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn find_folder(&self, id: &FolderId) -> AppResult<Option<Folder>> {
        Ok(self.tables.read().await.folders.get(id).cloned())
    }

    async fn insert_folder(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut tables = self.tables.write().await;
        if tables.folders.contains_key(&data.id) {
            return Err(AppError::conflict(format!(
                "Failed to create folder: duplicate key '{}'",
                data.id
            )));
        }

        let now = Utc::now();
        let folder = Folder {
            id: data.id.clone(),
            name: data.name.clone(),
            dark_mode: false,
            created_at: now,
            updated_at: now,
        };
        tables.folders.insert(folder.id.clone(), folder.clone());
        debug!(folder_id = %folder.id, "Inserted folder");
        Ok(folder)
    }

    async fn update_folder_name(&self, id: &FolderId, name: &str) -> AppResult<Option<Folder>> {
        let mut tables = self.tables.write().await;
        Ok(tables.folders.get_mut(id).map(|folder| {
            folder.name = name.to_string();
            folder.updated_at = Utc::now();
            folder.clone()
        }))
    }

    async fn update_folder_dark_mode(
        &self,
        id: &FolderId,
        dark_mode: bool,
    ) -> AppResult<Option<Folder>> {
        let mut tables = self.tables.write().await;
        Ok(tables.folders.get_mut(id).map(|folder| {
            folder.dark_mode = dark_mode;
            folder.updated_at = Utc::now();
            folder.clone()
        }))
    }

    async fn delete_folder(&self, id: &FolderId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.stickers.iter().any(|s| &s.folder_id == id) {
            return Err(AppError::database(format!(
                "Failed to delete folder: stickers still reference '{id}'"
            )));
        }
        Ok(tables.folders.remove(id).is_some())
    }
}

#[async_trait]
impl StickerStore for MemoryStore {
    async fn list_stickers(&self, folder_id: &FolderId) -> AppResult<Vec<Sticker>> {
        let tables = self.tables.read().await;
        let mut stickers: Vec<Sticker> = tables
            .stickers
            .iter()
            .filter(|s| &s.folder_id == folder_id)
            .cloned()
            .collect();
        stickers.sort_by_key(|s| s.created_at);
        Ok(stickers)
    }

    async fn insert_sticker(&self, data: &CreateSticker) -> AppResult<Sticker> {
        let mut tables = self.tables.write().await;
        if !tables.folders.contains_key(&data.folder_id) {
            return Err(AppError::not_found(format!(
                "Failed to create sticker: referenced folder '{}' does not exist",
                data.folder_id
            )));
        }

        let sticker = Sticker {
            id: StickerId::new(),
            folder_id: data.folder_id.clone(),
            content: data.content.clone(),
            color_index: data.color_index.as_i32(),
            created_at: Utc::now(),
        };
        tables.stickers.push(sticker.clone());
        Ok(sticker)
    }

    async fn delete_sticker(&self, id: StickerId) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.stickers.len();
        tables.stickers.retain(|s| s.id != id);
        Ok((before - tables.stickers.len()) as u64)
    }

    async fn delete_folder_stickers(&self, folder_id: &FolderId) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.stickers.len();
        tables.stickers.retain(|s| &s.folder_id != folder_id);
        Ok((before - tables.stickers.len()) as u64)
    }

    async fn update_sticker_color(
        &self,
        id: StickerId,
        color_index: i32,
    ) -> AppResult<Option<Sticker>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .stickers
            .iter_mut()
            .find(|s| s.id == id)
            .map(|sticker| {
                sticker.color_index = color_index;
                sticker.clone()
            }))
    }
}
