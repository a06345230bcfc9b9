//! Shared domain value types.

pub mod id;
pub mod palette;

pub use id::{FolderId, StickerId};
pub use palette::{ColorIndex, PALETTE_SIZE, StickerColor};
