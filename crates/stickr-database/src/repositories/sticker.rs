//! Sticker repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use stickr_core::result::AppResult;
use stickr_core::types::{FolderId, StickerId};
use stickr_entity::sticker::{CreateSticker, Sticker};

use super::store_error;
use crate::store::StickerStore;

/// PostgreSQL access to the `stickers` table.
#[derive(Debug, Clone)]
pub struct StickerRepository {
    pool: PgPool,
}

impl StickerRepository {
    /// Create a new sticker repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StickerStore for StickerRepository {
    async fn list_stickers(&self, folder_id: &FolderId) -> AppResult<Vec<Sticker>> {
        sqlx::query_as::<_, Sticker>(
            "SELECT * FROM stickers WHERE folder_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to list stickers"))
    }

    async fn insert_sticker(&self, data: &CreateSticker) -> AppResult<Sticker> {
        sqlx::query_as::<_, Sticker>(
            "INSERT INTO stickers (id, folder_id, content, color_index) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(StickerId::new())
        .bind(&data.folder_id)
        .bind(&data.content)
        .bind(data.color_index.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to create sticker"))
    }

    async fn delete_sticker(&self, id: StickerId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM stickers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, "Failed to delete sticker"))?;
        Ok(result.rows_affected())
    }

    async fn delete_folder_stickers(&self, folder_id: &FolderId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM stickers WHERE folder_id = $1")
            .bind(folder_id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, "Failed to delete folder stickers"))?;
        Ok(result.rows_affected())
    }

    async fn update_sticker_color(
        &self,
        id: StickerId,
        color_index: i32,
    ) -> AppResult<Option<Sticker>> {
        sqlx::query_as::<_, Sticker>(
            "UPDATE stickers SET color_index = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(color_index)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to update sticker color"))
    }
}
