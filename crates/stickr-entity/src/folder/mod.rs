//! Folder domain entities.

pub mod model;

pub use model::{CreateFolder, DEFAULT_FOLDER_NAME, Folder};
