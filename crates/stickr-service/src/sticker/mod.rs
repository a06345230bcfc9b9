//! Sticker repository.

pub mod service;

pub use service::{StickerService, prepare_content};
