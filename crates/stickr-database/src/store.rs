//! Table-level request/response interface to the remote store.
//!
//! Implementations must report a duplicate folder id on insert as
//! `ErrorKind::Conflict` and a sticker insert into a missing folder as
//! `ErrorKind::NotFound`. Nothing here validates content or color
//! ranges; callers do that before issuing a request.

use std::fmt;

use async_trait::async_trait;

use stickr_core::result::AppResult;
use stickr_core::types::{FolderId, StickerId};
use stickr_entity::folder::{CreateFolder, Folder};
use stickr_entity::sticker::{CreateSticker, Sticker};

/// CRUD over the `folders` table.
#[async_trait]
pub trait FolderStore: Send + Sync + fmt::Debug + 'static {
    /// Fetch a folder row by id.
    async fn find_folder(&self, id: &FolderId) -> AppResult<Option<Folder>>;

    /// Insert a folder row. Fails with a conflict if the id is taken.
    async fn insert_folder(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Set the folder name. Returns `None` if no row matched.
    async fn update_folder_name(&self, id: &FolderId, name: &str) -> AppResult<Option<Folder>>;

    /// Set the dark-mode flag. Returns `None` if no row matched.
    async fn update_folder_dark_mode(
        &self,
        id: &FolderId,
        dark_mode: bool,
    ) -> AppResult<Option<Folder>>;

    /// Delete the folder row only. Returns `true` if a row was removed.
    async fn delete_folder(&self, id: &FolderId) -> AppResult<bool>;
}

/// CRUD over the `stickers` table.
#[async_trait]
pub trait StickerStore: Send + Sync + fmt::Debug + 'static {
    /// All stickers of a folder, oldest first.
    async fn list_stickers(&self, folder_id: &FolderId) -> AppResult<Vec<Sticker>>;

    /// Insert a sticker row; the store assigns id and timestamp.
    async fn insert_sticker(&self, data: &CreateSticker) -> AppResult<Sticker>;

    /// Delete one sticker. Returns the number of rows removed (0 or 1).
    async fn delete_sticker(&self, id: StickerId) -> AppResult<u64>;

    /// Delete every sticker of a folder. Returns the number of rows removed.
    async fn delete_folder_stickers(&self, folder_id: &FolderId) -> AppResult<u64>;

    /// Write a raw color value. Returns `None` if no row matched.
    async fn update_sticker_color(
        &self,
        id: StickerId,
        color_index: i32,
    ) -> AppResult<Option<Sticker>>;
}
