//! Route handlers.

pub mod folder;
pub mod health;
pub mod sticker;
