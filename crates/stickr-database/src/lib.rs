//! # stickr-database
//!
//! The remote store behind Stickr: the [`FolderStore`] / [`StickerStore`]
//! request/response interface, its PostgreSQL implementation, and an
//! in-memory implementation with the same observable behavior.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Stores;
pub use store::{FolderStore, StickerStore};
