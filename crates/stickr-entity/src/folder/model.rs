//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use stickr_core::types::FolderId;

/// Name given to folders created on first visit.
pub const DEFAULT_FOLDER_NAME: &str = "Untitled Folder";

/// A shareable collection of stickers (`folders` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Opaque URL-safe id; immutable once created.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Dark display mode flag. Cosmetic only.
    pub dark_mode: bool,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a folder row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Id chosen by the client.
    pub id: FolderId,
    /// Initial name.
    pub name: String,
}

impl CreateFolder {
    /// Insert payload for a first visit to `id`.
    pub fn with_default_name(id: FolderId) -> Self {
        Self {
            id,
            name: DEFAULT_FOLDER_NAME.to_string(),
        }
    }
}
