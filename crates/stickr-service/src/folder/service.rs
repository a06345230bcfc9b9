//! Folder get-or-create, rename, display mode, and the two-step delete.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use stickr_core::error::AppError;
use stickr_core::result::AppResult;
use stickr_core::types::FolderId;
use stickr_database::store::{FolderStore, StickerStore};
use stickr_entity::folder::{CreateFolder, Folder};

/// Result of a caller-side rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Input was blank or equal to the current name; nothing was sent.
    Unchanged,
    /// The store accepted the new name.
    Renamed(Folder),
}

/// What happened to the folder row in the second step of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FolderRemoval {
    /// The folder row was deleted.
    Removed,
    /// There was no folder row to delete.
    AlreadyGone,
    /// Stickers were deleted but the folder row could not be. The folder
    /// now exists with no stickers.
    Orphaned {
        /// Store error message from the failed step.
        reason: String,
    },
}

/// Outcome of [`FolderService::delete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderDeletion {
    /// The folder that was targeted.
    pub folder_id: FolderId,
    /// Sticker rows removed in the first step.
    pub stickers_deleted: u64,
    /// Result of the second step.
    pub folder: FolderRemoval,
}

impl FolderDeletion {
    /// Whether the folder row is gone.
    pub fn is_complete(&self) -> bool {
        !matches!(self.folder, FolderRemoval::Orphaned { .. })
    }
}

/// Trim a rename input and decide whether it warrants a request.
///
/// Returns `None` for blank input or input equal to `current`.
pub fn plan_rename(current: &str, input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == current {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Folder repository over the remote store.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder table.
    folders: Arc<dyn FolderStore>,
    /// Sticker table, for the first step of a delete.
    stickers: Arc<dyn StickerStore>,
    /// Base URL used in share links.
    public_url: String,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(
        folders: Arc<dyn FolderStore>,
        stickers: Arc<dyn StickerStore>,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            folders,
            stickers,
            public_url: public_url.into(),
        }
    }

    /// Fetch a folder, creating it with the default name if absent.
    ///
    /// A conflicting insert means another client created the row between
    /// the read and the write; the existing row is re-fetched and returned.
    pub async fn get_or_create(&self, id: &FolderId) -> AppResult<Folder> {
        if let Some(folder) = self.folders.find_folder(id).await? {
            return Ok(folder);
        }

        match self
            .folders
            .insert_folder(&CreateFolder::with_default_name(id.clone()))
            .await
        {
            Ok(folder) => {
                info!(folder_id = %id, "Folder created");
                Ok(folder)
            }
            Err(e) if e.is_conflict() => {
                info!(folder_id = %id, "Folder created concurrently, re-fetching");
                self.folders.find_folder(id).await?.ok_or_else(|| {
                    AppError::internal(format!(
                        "Folder {id} reported as duplicate but could not be read back"
                    ))
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch an existing folder.
    pub async fn find(&self, id: &FolderId) -> AppResult<Folder> {
        self.folders
            .find_folder(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))
    }

    /// Create a folder under a freshly generated id.
    pub async fn create_random(&self) -> AppResult<Folder> {
        self.get_or_create(&FolderId::generate()).await
    }

    /// Set the folder name as given.
    pub async fn rename(&self, id: &FolderId, name: &str) -> AppResult<Folder> {
        let folder = self
            .folders
            .update_folder_name(id, name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))?;
        info!(folder_id = %id, "Folder renamed");
        Ok(folder)
    }

    /// Rename from user input, skipping the request when nothing changes.
    pub async fn apply_rename(&self, current: &Folder, input: &str) -> AppResult<RenameOutcome> {
        match plan_rename(&current.name, input) {
            Some(name) => self
                .rename(&current.id, &name)
                .await
                .map(RenameOutcome::Renamed),
            None => Ok(RenameOutcome::Unchanged),
        }
    }

    /// Set the dark display mode flag.
    pub async fn set_display_mode(&self, id: &FolderId, dark_mode: bool) -> AppResult<Folder> {
        self.folders
            .update_folder_dark_mode(id, dark_mode)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))
    }

    /// Delete every sticker in the folder, then the folder row.
    ///
    /// A failure in the first step is returned and the folder row is left
    /// alone. A failure in the second step is reported in the outcome as
    /// [`FolderRemoval::Orphaned`]; the two steps are not transactional.
    pub async fn delete(&self, id: &FolderId) -> AppResult<FolderDeletion> {
        let stickers_deleted = self.stickers.delete_folder_stickers(id).await?;

        let folder = match self.folders.delete_folder(id).await {
            Ok(true) => FolderRemoval::Removed,
            Ok(false) => FolderRemoval::AlreadyGone,
            Err(e) => {
                warn!(folder_id = %id, error = %e, "Folder row survived sticker deletion");
                FolderRemoval::Orphaned { reason: e.message }
            }
        };

        info!(folder_id = %id, stickers_deleted, "Folder deleted");
        Ok(FolderDeletion {
            folder_id: id.clone(),
            stickers_deleted,
            folder,
        })
    }

    /// Link that opens the folder's board.
    pub fn share_url(&self, id: &FolderId) -> String {
        format!("{}/folder/{id}", self.public_url.trim_end_matches('/'))
    }
}
