//! Typed path parameter helpers.

use stickr_core::error::AppError;
use stickr_core::types::{FolderId, StickerId};

/// Parses a folder id from a path segment.
pub fn parse_folder_id(s: &str) -> Result<FolderId, AppError> {
    FolderId::parse(s)
}

/// Parses a sticker id from a path segment.
pub fn parse_sticker_id(s: &str) -> Result<StickerId, AppError> {
    s.parse()
}
