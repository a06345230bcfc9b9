//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use stickr_core::result::AppResult;
use stickr_core::types::FolderId;
use stickr_entity::folder::{CreateFolder, Folder};

use super::store_error;
use crate::store::FolderStore;

/// PostgreSQL access to the `folders` table.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn find_folder(&self, id: &FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error(e, "Failed to find folder"))
    }

    async fn insert_folder(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.id)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to create folder"))
    }

    async fn update_folder_name(&self, id: &FolderId, name: &str) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to rename folder"))
    }

    async fn update_folder_dark_mode(
        &self,
        id: &FolderId,
        dark_mode: bool,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET dark_mode = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dark_mode)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to update dark mode"))
    }

    async fn delete_folder(&self, id: &FolderId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, "Failed to delete folder"))?;
        Ok(result.rows_affected() > 0)
    }
}
