//! Sticker entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use stickr_core::types::{ColorIndex, FolderId, StickerId};

/// A freeform text note (`stickers` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Sticker {
    /// Store-assigned id.
    pub id: StickerId,
    /// Owning folder.
    pub folder_id: FolderId,
    /// Note text, never empty after trimming.
    pub content: String,
    /// Raw palette value as stored; read it through [`Sticker::color`].
    pub color_index: i32,
    /// When the sticker was created. Lists are ordered by this column.
    pub created_at: DateTime<Utc>,
}

impl Sticker {
    /// Palette position, folded into range.
    pub fn color(&self) -> ColorIndex {
        ColorIndex::from_raw(i64::from(self.color_index))
    }
}

/// Data required to insert a sticker row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSticker {
    /// Owning folder; must exist.
    pub folder_id: FolderId,
    /// Trimmed, non-empty text.
    pub content: String,
    /// Initial color.
    pub color_index: ColorIndex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_reads_out_of_range_values_through_palette() {
        let sticker = Sticker {
            id: StickerId::new(),
            folder_id: FolderId::parse("abc123").expect("id"),
            content: "hello".to_string(),
            color_index: 7,
            created_at: Utc::now(),
        };
        assert_eq!(sticker.color().value(), 2);
    }
}
