//! Sticker listing, creation, deletion, and color updates.

use std::sync::Arc;

use tracing::{debug, info};

use stickr_core::error::AppError;
use stickr_core::result::AppResult;
use stickr_core::types::{ColorIndex, FolderId, StickerId};
use stickr_database::store::StickerStore;
use stickr_entity::sticker::{CreateSticker, Sticker};

/// Trim composer input. Returns `None` when nothing is left to save.
pub fn prepare_content(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Sticker repository over the remote store.
///
/// Every mutation leaves the caller's loaded list stale; callers refetch
/// with [`StickerService::list`] afterwards.
#[derive(Debug, Clone)]
pub struct StickerService {
    stickers: Arc<dyn StickerStore>,
}

impl StickerService {
    /// Creates a new sticker service.
    pub fn new(stickers: Arc<dyn StickerStore>) -> Self {
        Self { stickers }
    }

    /// Stickers in the folder, oldest first.
    pub async fn list(&self, folder_id: &FolderId) -> AppResult<Vec<Sticker>> {
        let stickers = self.stickers.list_stickers(folder_id).await?;
        debug!(folder_id = %folder_id, count = stickers.len(), "Loaded stickers");
        Ok(stickers)
    }

    /// Add a sticker to the folder.
    ///
    /// `content` is trimmed; blank content is rejected before any request.
    pub async fn create(
        &self,
        folder_id: &FolderId,
        content: &str,
        color: ColorIndex,
    ) -> AppResult<Sticker> {
        let content = prepare_content(content)
            .ok_or_else(|| AppError::validation("Sticker content cannot be empty"))?;

        let sticker = self
            .stickers
            .insert_sticker(&CreateSticker {
                folder_id: folder_id.clone(),
                content,
                color_index: color,
            })
            .await?;

        info!(folder_id = %folder_id, sticker_id = %sticker.id, "Sticker created");
        Ok(sticker)
    }

    /// Delete a sticker. Returns `false` if it was already gone.
    pub async fn delete(&self, id: StickerId) -> AppResult<bool> {
        let removed = self.stickers.delete_sticker(id).await? > 0;
        info!(sticker_id = %id, removed, "Sticker delete");
        Ok(removed)
    }

    /// Set a sticker's color, folding `raw` into the palette first.
    pub async fn set_color(&self, id: StickerId, raw: i64) -> AppResult<ColorIndex> {
        let color = ColorIndex::from_raw(raw);
        self.stickers
            .update_sticker_color(id, color.as_i32())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Sticker {id} not found")))?;
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use stickr_core::error::ErrorKind;
    use stickr_database::MemoryStore;
    use stickr_database::store::FolderStore;
    use stickr_entity::folder::CreateFolder;

    use super::*;

    async fn setup() -> (StickerService, MemoryStore, FolderId) {
        let store = MemoryStore::new();
        let id = FolderId::parse("abc123").expect("valid id");
        store
            .insert_folder(&CreateFolder::with_default_name(id.clone()))
            .await
            .expect("folder");
        (StickerService::new(Arc::new(store.clone())), store, id)
    }

    #[tokio::test]
    async fn test_create_then_list_contains_content() {
        let (svc, _, folder) = setup().await;
        svc.create(&folder, "  buy milk \n", ColorIndex::default())
            .await
            .expect("create");

        let listed = svc.list(&folder).await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].content, "buy milk");
        assert_eq!(listed[0].color_index, 0);
    }

    #[tokio::test]
    async fn test_blank_content_rejected_without_request() {
        let (svc, store, folder) = setup().await;
        let err = svc
            .create(&folder, " \n\t ", ColorIndex::default())
            .await
            .expect_err("blank");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(store.sticker_count().await, 0);
    }

    #[tokio::test]
    async fn test_list_is_oldest_first() {
        let (svc, _, folder) = setup().await;
        for content in ["A", "B", "C"] {
            svc.create(&folder, content, ColorIndex::default())
                .await
                .expect("create");
        }
        let contents: Vec<String> = svc
            .list(&folder)
            .await
            .expect("list")
            .into_iter()
            .map(|s| s.content)
            .collect();
        assert_eq!(contents, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (svc, _, folder) = setup().await;
        let sticker = svc
            .create(&folder, "gone soon", ColorIndex::default())
            .await
            .expect("create");

        assert!(svc.delete(sticker.id).await.expect("first delete"));
        assert!(!svc.delete(sticker.id).await.expect("second delete"));
        assert!(svc.list(&folder).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn test_set_color_normalizes_before_write() {
        let (svc, _, folder) = setup().await;
        let sticker = svc
            .create(&folder, "tinted", ColorIndex::default())
            .await
            .expect("create");

        let color = svc.set_color(sticker.id, 7).await.expect("color");
        assert_eq!(color.value(), 2);
        let stored = &svc.list(&folder).await.expect("list")[0];
        assert_eq!(stored.color_index, 2);

        assert_eq!(svc.set_color(sticker.id, -1).await.expect("color").value(), 4);
    }

    #[tokio::test]
    async fn test_create_in_missing_folder_is_not_found() {
        let svc = StickerService::new(Arc::new(MemoryStore::new()));
        let folder = FolderId::parse("nowhere").expect("valid id");
        let err = svc
            .create(&folder, "lost", ColorIndex::default())
            .await
            .expect_err("missing folder");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_prepare_content() {
        assert_eq!(prepare_content("  hi  "), Some("hi".to_string()));
        assert_eq!(prepare_content("   "), None);
    }
}
