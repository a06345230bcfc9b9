//! Sticker domain entities.

pub mod model;

pub use model::{CreateSticker, Sticker};
