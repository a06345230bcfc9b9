//! # stickr-entity
//!
//! Row models for the two Stickr tables. Every struct here is either a
//! table row (deriving `sqlx::FromRow`) or the insert payload for one.

pub mod folder;
pub mod sticker;
