//! Sticker color palette.
//!
//! Stored color values are plain integers and the store accepts any of
//! them. [`ColorIndex::from_raw`] is the one place where a raw value is
//! folded into the palette; both the write path and the read path go
//! through it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of sticker colors.
pub const PALETTE_SIZE: usize = 5;

/// Named sticker colors, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerColor {
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
}

impl StickerColor {
    /// All colors in palette order.
    pub const ALL: [StickerColor; PALETTE_SIZE] = [
        StickerColor::Yellow,
        StickerColor::Pink,
        StickerColor::Blue,
        StickerColor::Green,
        StickerColor::Purple,
    ];

    /// Lowercase color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }
}

impl fmt::Display for StickerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A palette position, always in `0..PALETTE_SIZE`.
///
/// Deserializing accepts any integer and folds it like [`ColorIndex::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Fold any integer into the palette (`raw mod 5`, never negative).
    pub fn from_raw(raw: i64) -> Self {
        Self(raw.rem_euclid(PALETTE_SIZE as i64) as u8)
    }

    /// Palette position.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Value written to the `color_index` column.
    pub fn as_i32(self) -> i32 {
        i32::from(self.0)
    }

    /// The color at this position.
    pub fn color(self) -> StickerColor {
        StickerColor::ALL[usize::from(self.0)]
    }

    /// The next color, wrapping after the last one.
    pub fn next(self) -> Self {
        Self::from_raw(i64::from(self.0) + 1)
    }
}

impl From<i64> for ColorIndex {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<ColorIndex> for u8 {
    fn from(color: ColorIndex) -> Self {
        color.0
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.color())
    }
}
