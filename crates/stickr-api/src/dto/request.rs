//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Folder update body. Absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateFolderRequest {
    /// New name. Blank or unchanged names are ignored.
    #[validate(length(max = 255, message = "Folder name is too long"))]
    pub name: Option<String>,
    /// Dark display mode flag.
    pub dark_mode: Option<bool>,
}

/// New sticker body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStickerRequest {
    /// Note text. Trimmed; must not be blank.
    #[validate(length(min = 1, max = 10000, message = "Sticker content must be 1-10000 characters"))]
    pub content: String,
    /// Initial palette value; folded into range. Defaults to 0.
    pub color_index: Option<i64>,
}

/// Sticker color body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateColorRequest {
    /// Any integer; folded into the palette.
    pub color_index: i64,
}
