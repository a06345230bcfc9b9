//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stickr_core::types::{ColorIndex, FolderId, StickerColor, StickerId};
use stickr_entity::folder::Folder;
use stickr_entity::sticker::Sticker;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Configured store provider.
    pub store: String,
}

/// A folder plus the link that opens it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderResponse {
    pub id: FolderId,
    pub name: String,
    pub dark_mode: bool,
    pub share_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FolderResponse {
    pub fn new(folder: Folder, share_url: String) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            dark_mode: folder.dark_mode,
            share_url,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
        }
    }
}

/// A sticker with its color already folded into the palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickerResponse {
    pub id: StickerId,
    pub folder_id: FolderId,
    pub content: String,
    pub color_index: u8,
    pub color: StickerColor,
    pub created_at: DateTime<Utc>,
}

impl From<Sticker> for StickerResponse {
    fn from(sticker: Sticker) -> Self {
        let color = sticker.color();
        Self {
            id: sticker.id,
            folder_id: sticker.folder_id,
            content: sticker.content,
            color_index: color.value(),
            color: color.color(),
            created_at: sticker.created_at,
        }
    }
}

/// Result of a sticker delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStickerResponse {
    /// `false` when the sticker was already gone.
    pub deleted: bool,
}

/// Color stored for a sticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorResponse {
    pub id: StickerId,
    pub color_index: u8,
    pub color: StickerColor,
}

impl ColorResponse {
    pub fn new(id: StickerId, color: ColorIndex) -> Self {
        Self {
            id,
            color_index: color.value(),
            color: color.color(),
        }
    }
}
