//! Folder repository.

pub mod service;

pub use service::{FolderDeletion, FolderRemoval, FolderService, RenameOutcome, plan_rename};
