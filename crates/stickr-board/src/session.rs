//! A single open board: one folder, its loaded stickers, and focus.
//!
//! Every mutation goes to the store first and is followed by a full
//! refetch; nothing is updated optimistically. Failures become error
//! toasts and leave the loaded state as it was.

use std::time::Duration;

use tracing::{debug, warn};

use stickr_core::config::BoardConfig;
use stickr_core::result::AppResult;
use stickr_core::types::{ColorIndex, FolderId, StickerId};
use stickr_entity::folder::Folder;
use stickr_entity::sticker::Sticker;
use stickr_service::{
    FolderDeletion, FolderService, RenameOutcome, StickerService, prepare_content,
};

use crate::clipboard::Clipboard;
use crate::navigation::{
    ActiveElement, FocusState, KeyEvent, NavigationController, SideEffect, Transition,
};
use crate::toast::ToastQueue;

/// State and actions of one open board.
#[derive(Debug)]
pub struct BoardSession<C> {
    folders: FolderService,
    stickers: StickerService,
    controller: NavigationController,
    clipboard: C,
    toasts: ToastQueue,
    folder: Folder,
    list: Vec<Sticker>,
    focus: FocusState,
    draft: String,
    closed: bool,
}

impl<C: Clipboard> BoardSession<C> {
    /// Open the board for `folder_id`, creating the folder on first visit.
    pub async fn open(
        folders: FolderService,
        stickers: StickerService,
        config: &BoardConfig,
        folder_id: &FolderId,
        clipboard: C,
    ) -> AppResult<Self> {
        let folder = folders.get_or_create(folder_id).await?;
        let list = stickers.list(folder_id).await?;

        Ok(Self {
            folders,
            stickers,
            controller: NavigationController::new(config.grid_columns),
            clipboard,
            toasts: ToastQueue::new(Duration::from_secs(config.toast_seconds)),
            folder,
            list,
            focus: FocusState::Unfocused,
            draft: String::new(),
            closed: false,
        })
    }

    pub fn folder(&self) -> &Folder {
        &self.folder
    }

    /// Stickers as of the last refetch, oldest first.
    pub fn stickers(&self) -> &[Sticker] {
        &self.list
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    /// Composer text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Whether the folder was deleted and the board should close.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Reload the sticker list and drop focus from a vanished sticker.
    pub async fn refresh(&mut self) {
        match self.stickers.list(&self.folder.id).await {
            Ok(list) => {
                self.list = list;
                self.focus = self.controller.reconcile(self.focus, &self.list);
            }
            Err(e) => {
                warn!(folder_id = %self.folder.id, error = %e, "Sticker refetch failed");
                self.toasts.error("Failed to load stickers");
            }
        }
    }

    /// Route a key press through the controller. Returns whether it was
    /// consumed.
    pub fn handle_key(&mut self, event: KeyEvent, active: ActiveElement) -> bool {
        match self
            .controller
            .handle_key_event(&self.focus, &event, active, &self.list)
        {
            Some(transition) => self.apply(transition),
            None => false,
        }
    }

    /// Focus a sticker and copy its content. Returns `false` when the
    /// sticker is not in the loaded list.
    pub fn click(&mut self, id: StickerId) -> bool {
        match self.controller.click(id, &self.list) {
            Some(transition) => {
                self.apply(transition);
                true
            }
            None => false,
        }
    }

    /// Focus the first sticker when nothing is focused.
    pub fn focus_first(&mut self) {
        if self.focus == FocusState::Unfocused {
            if let Some(first) = self.list.first() {
                self.focus = FocusState::Focused(first.id);
            }
        }
    }

    fn apply(&mut self, transition: Transition) -> bool {
        let consumed = transition.prevents_default();
        if transition.state.is_composing() && !self.focus.is_composing() {
            self.draft.clear();
        }
        self.focus = transition.state;

        for effect in transition.effects {
            if let SideEffect::CopyToClipboard(text) = effect {
                self.copy(&text, "Copied to clipboard!", "Failed to copy");
            }
        }
        consumed
    }

    fn copy(&mut self, text: &str, ok: &str, failed: &str) {
        match self.clipboard.write_text(text) {
            Ok(()) => self.toasts.success(ok),
            Err(e) => {
                warn!(error = %e, "Clipboard write failed");
                self.toasts.error(failed);
            }
        }
    }

    /// Save the composer text as a new sticker.
    ///
    /// Blank text is ignored without a request. On success the composer
    /// closes and the list is refetched.
    pub async fn submit_draft(&mut self) {
        let Some(content) = prepare_content(&self.draft) else {
            debug!("Ignoring blank sticker draft");
            return;
        };

        match self
            .stickers
            .create(&self.folder.id, &content, ColorIndex::default())
            .await
        {
            Ok(_) => {
                self.draft.clear();
                self.focus = FocusState::Unfocused;
                self.toasts.success("Sticker created!");
                self.refresh().await;
            }
            Err(e) => {
                warn!(folder_id = %self.folder.id, error = %e, "Sticker create failed");
                self.toasts.error("Failed to create sticker");
            }
        }
    }

    /// Delete a sticker and refetch.
    pub async fn delete_sticker(&mut self, id: StickerId) {
        match self.stickers.delete(id).await {
            Ok(_) => {
                self.toasts.success("Sticker deleted!");
                self.refresh().await;
            }
            Err(e) => {
                warn!(sticker_id = %id, error = %e, "Sticker delete failed");
                self.toasts.error("Failed to delete sticker");
            }
        }
    }

    /// Delete the focused sticker, if any.
    pub async fn delete_focused(&mut self) {
        if let Some(id) = self.focus.focused() {
            self.delete_sticker(id).await;
        }
    }

    /// Move a sticker to the next palette color and refetch.
    pub async fn cycle_color(&mut self, id: StickerId) {
        let Some(sticker) = self.list.iter().find(|s| s.id == id) else {
            return;
        };
        let next = sticker.color().next();

        match self.stickers.set_color(id, i64::from(next.value())).await {
            Ok(_) => self.refresh().await,
            Err(e) => {
                warn!(sticker_id = %id, error = %e, "Color update failed");
                self.toasts.error("Failed to update color");
            }
        }
    }

    /// Cycle the focused sticker's color, if any.
    pub async fn cycle_focused_color(&mut self) {
        if let Some(id) = self.focus.focused() {
            self.cycle_color(id).await;
        }
    }

    /// Rename the folder from user input. Blank or unchanged input does
    /// nothing.
    pub async fn rename(&mut self, input: &str) {
        match self.folders.apply_rename(&self.folder, input).await {
            Ok(RenameOutcome::Unchanged) => {}
            Ok(RenameOutcome::Renamed(folder)) => {
                self.folder = folder;
                self.toasts.success("Folder name updated!");
            }
            Err(e) => {
                warn!(folder_id = %self.folder.id, error = %e, "Folder rename failed");
                self.toasts.error("Failed to update folder name");
            }
        }
    }

    /// Flip the folder's dark display mode.
    pub async fn toggle_dark_mode(&mut self) {
        match self
            .folders
            .set_display_mode(&self.folder.id, !self.folder.dark_mode)
            .await
        {
            Ok(folder) => self.folder = folder,
            Err(e) => {
                warn!(folder_id = %self.folder.id, error = %e, "Dark mode update failed");
                self.toasts.error("Failed to update dark mode");
            }
        }
    }

    /// Delete the folder and its stickers.
    ///
    /// The board closes once the folder row is gone. If only the stickers
    /// could be removed the board stays open on the empty folder.
    pub async fn delete_folder(&mut self) -> Option<FolderDeletion> {
        match self.folders.delete(&self.folder.id).await {
            Ok(outcome) => {
                if outcome.is_complete() {
                    self.closed = true;
                    self.list.clear();
                    self.focus = FocusState::Unfocused;
                    self.toasts.success("Folder deleted!");
                } else {
                    self.toasts
                        .error("Stickers deleted, but the folder could not be removed");
                    self.refresh().await;
                }
                Some(outcome)
            }
            Err(e) => {
                warn!(folder_id = %self.folder.id, error = %e, "Folder delete failed");
                self.toasts.error("Failed to delete folder");
                None
            }
        }
    }

    /// Link that opens this board.
    pub fn share_url(&self) -> String {
        self.folders.share_url(&self.folder.id)
    }

    /// Copy the share link.
    pub fn share_link(&mut self) {
        let url = self.share_url();
        self.copy(&url, "Link copied to clipboard!", "Failed to copy link");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use stickr_core::error::AppError;
    use stickr_database::MemoryStore;
    use stickr_database::store::{FolderStore, StickerStore};
    use stickr_entity::folder::CreateFolder;
    use stickr_entity::sticker::CreateSticker;

    use crate::clipboard::RecordingClipboard;
    use crate::navigation::Key;
    use crate::toast::ToastLevel;

    use super::*;

    /// Sticker store whose writes can be switched off.
    #[derive(Debug, Default)]
    struct FlakyStickers {
        inner: MemoryStore,
        writes_fail: bool,
    }

    #[async_trait]
    impl StickerStore for FlakyStickers {
        async fn list_stickers(&self, folder_id: &FolderId) -> AppResult<Vec<Sticker>> {
            self.inner.list_stickers(folder_id).await
        }

        async fn insert_sticker(&self, data: &CreateSticker) -> AppResult<Sticker> {
            if self.writes_fail {
                return Err(AppError::service_unavailable("store offline"));
            }
            self.inner.insert_sticker(data).await
        }

        async fn delete_sticker(&self, id: StickerId) -> AppResult<u64> {
            if self.writes_fail {
                return Err(AppError::service_unavailable("store offline"));
            }
            self.inner.delete_sticker(id).await
        }

        async fn delete_folder_stickers(&self, folder_id: &FolderId) -> AppResult<u64> {
            self.inner.delete_folder_stickers(folder_id).await
        }

        async fn update_sticker_color(
            &self,
            id: StickerId,
            color_index: i32,
        ) -> AppResult<Option<Sticker>> {
            self.inner.update_sticker_color(id, color_index).await
        }
    }

    fn abc123() -> FolderId {
        FolderId::parse("abc123").expect("valid id")
    }

    async fn open_with(
        store: MemoryStore,
        stickers: Arc<dyn StickerStore>,
        clipboard: RecordingClipboard,
    ) -> BoardSession<RecordingClipboard> {
        let folders = FolderService::new(
            Arc::new(store.clone()),
            stickers.clone(),
            "http://localhost:8080",
        );
        BoardSession::open(
            folders,
            StickerService::new(stickers),
            &BoardConfig::default(),
            &abc123(),
            clipboard,
        )
        .await
        .expect("board opens")
    }

    async fn open(
        contents: &[&str],
        clipboard: RecordingClipboard,
    ) -> (BoardSession<RecordingClipboard>, MemoryStore) {
        let store = MemoryStore::new();
        store
            .insert_folder(&CreateFolder::with_default_name(abc123()))
            .await
            .expect("folder");
        for content in contents {
            store
                .insert_sticker(&CreateSticker {
                    folder_id: abc123(),
                    content: content.to_string(),
                    color_index: ColorIndex::default(),
                })
                .await
                .expect("sticker");
        }
        let session = open_with(store.clone(), Arc::new(store.clone()), clipboard).await;
        (session, store)
    }

    fn latest_toast(session: &BoardSession<RecordingClipboard>) -> Option<(String, ToastLevel)> {
        session
            .toasts()
            .latest()
            .map(|t| (t.message.clone(), t.level))
    }

    #[tokio::test]
    async fn test_open_creates_missing_folder() {
        let store = MemoryStore::new();
        let session = open_with(
            store.clone(),
            Arc::new(store.clone()),
            RecordingClipboard::default(),
        )
        .await;
        assert_eq!(session.folder().name, "Untitled Folder");
        assert!(session.stickers().is_empty());
        assert!(store.find_folder(&abc123()).await.expect("find").is_some());
    }

    #[tokio::test]
    async fn test_deleting_focused_sticker_clears_focus() {
        let (mut session, _) = open(&["A", "B", "C"], RecordingClipboard::default()).await;
        let target = session.stickers()[1].id;
        assert!(session.click(target));
        assert_eq!(session.focus(), FocusState::Focused(target));
        assert!(!session.click(StickerId::new()));
        assert_eq!(session.focus(), FocusState::Focused(target));

        session.delete_focused().await;
        assert_eq!(session.focus(), FocusState::Unfocused);
        assert_eq!(session.stickers().len(), 2);
        assert_eq!(
            latest_toast(&session),
            Some(("Sticker deleted!".to_string(), ToastLevel::Success))
        );
    }

    #[tokio::test]
    async fn test_external_delete_is_reconciled_on_refresh() {
        let (mut session, store) = open(&["A", "B"], RecordingClipboard::default()).await;
        let target = session.stickers()[0].id;
        session.click(target);

        store.delete_sticker(target).await.expect("delete");
        session.refresh().await;
        assert_eq!(session.focus(), FocusState::Unfocused);
    }

    #[tokio::test]
    async fn test_click_and_ctrl_c_copy_content() {
        let clipboard = RecordingClipboard::default();
        let (mut session, _) = open(&["A", "B"], clipboard.clone()).await;

        let first = session.stickers()[0].id;
        session.click(first);
        assert_eq!(clipboard.last().as_deref(), Some("A"));

        assert!(session.handle_key(KeyEvent::new(Key::ArrowRight), ActiveElement::None));
        assert!(session.handle_key(KeyEvent::char('c').with_ctrl(), ActiveElement::None));
        assert_eq!(clipboard.last().as_deref(), Some("B"));
        assert_eq!(
            latest_toast(&session),
            Some(("Copied to clipboard!".to_string(), ToastLevel::Success))
        );
    }

    #[tokio::test]
    async fn test_clipboard_failure_is_a_toast() {
        let clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let (mut session, _) = open(&["A"], clipboard).await;
        let id = session.stickers()[0].id;
        session.click(id);

        assert_eq!(session.focus(), FocusState::Focused(id));
        assert_eq!(
            latest_toast(&session),
            Some(("Failed to copy".to_string(), ToastLevel::Error))
        );
    }

    #[tokio::test]
    async fn test_compose_and_submit() {
        let (mut session, _) = open(&[], RecordingClipboard::default()).await;
        assert!(session.handle_key(KeyEvent::char('n'), ActiveElement::None));
        assert!(session.focus().is_composing());

        session.draft_mut().push_str("   ");
        session.submit_draft().await;
        assert!(session.stickers().is_empty());
        assert!(session.focus().is_composing());

        session.draft_mut().push_str("call mom ");
        session.submit_draft().await;
        assert_eq!(session.focus(), FocusState::Unfocused);
        assert_eq!(session.draft(), "");
        assert_eq!(session.stickers().len(), 1);
        assert_eq!(session.stickers()[0].content, "call mom");
    }

    #[tokio::test]
    async fn test_failed_create_keeps_draft_and_list() {
        let store = MemoryStore::new();
        let stickers = Arc::new(FlakyStickers {
            inner: store.clone(),
            writes_fail: true,
        });
        let mut session = open_with(store, stickers, RecordingClipboard::default()).await;

        session.handle_key(KeyEvent::char('n'), ActiveElement::None);
        session.draft_mut().push_str("keep me");
        session.submit_draft().await;

        assert_eq!(session.draft(), "keep me");
        assert!(session.focus().is_composing());
        assert!(session.stickers().is_empty());
        assert_eq!(
            latest_toast(&session),
            Some(("Failed to create sticker".to_string(), ToastLevel::Error))
        );
    }

    #[tokio::test]
    async fn test_cycle_color_refetches() {
        let (mut session, _) = open(&["A"], RecordingClipboard::default()).await;
        let id = session.stickers()[0].id;
        session.cycle_color(id).await;
        assert_eq!(session.stickers()[0].color_index, 1);
    }

    #[tokio::test]
    async fn test_rename_and_dark_mode() {
        let (mut session, _) = open(&[], RecordingClipboard::default()).await;
        session.rename("Untitled Folder").await;
        assert!(session.toasts().is_empty());

        session.rename(" Plans ").await;
        assert_eq!(session.folder().name, "Plans");
        assert_eq!(
            latest_toast(&session),
            Some(("Folder name updated!".to_string(), ToastLevel::Success))
        );

        session.toggle_dark_mode().await;
        assert!(session.folder().dark_mode);
    }

    #[tokio::test]
    async fn test_delete_folder_closes_board() {
        let (mut session, store) =
            open(&["1", "2", "3", "4", "5"], RecordingClipboard::default()).await;
        let outcome = session.delete_folder().await.expect("deleted");

        assert_eq!(outcome.stickers_deleted, 5);
        assert!(session.is_closed());
        assert_eq!(store.sticker_count().await, 0);
        assert!(store.find_folder(&abc123()).await.expect("find").is_none());
    }

    #[tokio::test]
    async fn test_share_link_copies_url() {
        let clipboard = RecordingClipboard::default();
        let (mut session, _) = open(&[], clipboard.clone()).await;
        session.share_link();
        assert_eq!(
            clipboard.last().as_deref(),
            Some("http://localhost:8080/folder/abc123")
        );
    }
}
