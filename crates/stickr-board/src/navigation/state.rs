//! Focus state of a board.

use stickr_core::types::StickerId;
use stickr_entity::sticker::Sticker;

/// Which sticker, if any, has keyboard focus. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused(StickerId),
    /// The new-sticker composer is open. No sticker is focused.
    Composing,
}

impl FocusState {
    /// The focused sticker id, if any.
    pub fn focused(&self) -> Option<StickerId> {
        match self {
            Self::Focused(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether the composer is open.
    pub fn is_composing(&self) -> bool {
        matches!(self, Self::Composing)
    }

    /// Position of the focused sticker in `list`.
    pub fn index_in(&self, list: &[Sticker]) -> Option<usize> {
        let id = self.focused()?;
        list.iter().position(|s| s.id == id)
    }
}
