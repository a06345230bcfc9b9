//! # stickr-service
//!
//! The folder and sticker repositories. Each service wraps a store trait
//! object and adds the behavior the board relies on: get-or-create with
//! conflict recovery, the two-step folder delete, idempotent sticker
//! delete, and color normalization.
//!
//! Services follow constructor injection; stores are provided at
//! construction time via `Arc` references.

pub mod folder;
pub mod sticker;

pub use folder::{FolderDeletion, FolderRemoval, FolderService, RenameOutcome};
pub use sticker::{StickerService, prepare_content};
