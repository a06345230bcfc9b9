//! Focus transitions driven by key events and clicks.

use stickr_core::types::StickerId;
use stickr_entity::sticker::Sticker;

use super::key::{ActiveElement, Key, KeyEvent};
use super::state::FocusState;

/// Grid width assumed for vertical moves.
pub const DEFAULT_COLUMNS: usize = 4;

/// Widest grid a controller accepts.
pub const MAX_COLUMNS: usize = 12;

/// Work the host performs after applying a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Write the text to the clipboard.
    CopyToClipboard(String),
    /// The event was consumed; suppress the host's default handling.
    PreventDefault,
}

/// New focus state plus the effects to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FocusState,
    pub effects: Vec<SideEffect>,
}

impl Transition {
    fn consumed(state: FocusState) -> Self {
        Self {
            state,
            effects: vec![SideEffect::PreventDefault],
        }
    }

    /// The text to copy, if this transition copies anything.
    pub fn copied_text(&self) -> Option<&str> {
        self.effects.iter().find_map(|effect| match effect {
            SideEffect::CopyToClipboard(text) => Some(text.as_str()),
            SideEffect::PreventDefault => None,
        })
    }

    /// Whether the host should suppress default handling.
    pub fn prevents_default(&self) -> bool {
        self.effects.contains(&SideEffect::PreventDefault)
    }
}

/// Maps key events to focus transitions over a grid of `columns` columns.
///
/// The column count is fixed at construction and does not follow the
/// rendered layout, so vertical moves on a narrower screen skip by the
/// configured width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationController {
    columns: usize,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl NavigationController {
    /// Create a controller. The column count is clamped to
    /// `1..=MAX_COLUMNS`.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.clamp(1, MAX_COLUMNS),
        }
    }

    /// Grid width used for vertical moves.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Decide what a key press does. `None` means no transition.
    pub fn handle_key_event(
        &self,
        state: &FocusState,
        event: &KeyEvent,
        active: ActiveElement,
        list: &[Sticker],
    ) -> Option<Transition> {
        let command = event.modifiers.command();

        match event.key {
            Key::Char('n' | 'N') if !command => {
                if active.captures_keys() || state.is_composing() {
                    return None;
                }
                Some(Transition::consumed(FocusState::Composing))
            }
            Key::Escape => match state {
                FocusState::Unfocused => None,
                FocusState::Focused(_) | FocusState::Composing => {
                    Some(Transition::consumed(FocusState::Unfocused))
                }
            },
            _ => {
                let FocusState::Focused(_) = state else {
                    return None;
                };
                if active.captures_keys() {
                    return None;
                }
                let Some(index) = state.index_in(list) else {
                    return Some(Transition {
                        state: FocusState::Unfocused,
                        effects: Vec::new(),
                    });
                };
                self.navigate(*state, index, event, list)
            }
        }
    }

    fn navigate(
        &self,
        state: FocusState,
        index: usize,
        event: &KeyEvent,
        list: &[Sticker],
    ) -> Option<Transition> {
        let len = list.len();
        let target = match event.key {
            Key::ArrowRight => (index + 1) % len,
            Key::ArrowLeft => (index + len - 1) % len,
            Key::ArrowDown => (index + self.columns).min(len - 1),
            Key::ArrowUp => index.saturating_sub(self.columns),
            Key::Char('c' | 'C') if event.modifiers.command() => {
                return Some(Transition {
                    state,
                    effects: vec![
                        SideEffect::CopyToClipboard(list[index].content.clone()),
                        SideEffect::PreventDefault,
                    ],
                });
            }
            _ => return None,
        };

        if target == index {
            return None;
        }
        Some(Transition::consumed(FocusState::Focused(list[target].id)))
    }

    /// Drop focus from a sticker that is no longer in `list`.
    pub fn reconcile(&self, state: FocusState, list: &[Sticker]) -> FocusState {
        match state {
            FocusState::Focused(_) if state.index_in(list).is_none() => FocusState::Unfocused,
            other => other,
        }
    }

    /// Clicking a sticker focuses it and copies its content.
    pub fn click(&self, id: StickerId, list: &[Sticker]) -> Option<Transition> {
        let sticker = list.iter().find(|s| s.id == id)?;
        Some(Transition {
            state: FocusState::Focused(id),
            effects: vec![SideEffect::CopyToClipboard(sticker.content.clone())],
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use stickr_core::types::FolderId;

    use super::*;

    fn stickers(contents: &[&str]) -> Vec<Sticker> {
        let folder_id = FolderId::parse("abc123").expect("valid id");
        contents
            .iter()
            .map(|content| Sticker {
                id: StickerId::new(),
                folder_id: folder_id.clone(),
                content: content.to_string(),
                color_index: 0,
                created_at: Utc::now(),
            })
            .collect()
    }

    fn press(
        controller: &NavigationController,
        state: FocusState,
        key: Key,
        list: &[Sticker],
    ) -> Option<Transition> {
        controller.handle_key_event(&state, &KeyEvent::new(key), ActiveElement::None, list)
    }

    fn focused_index(transition: &Transition, list: &[Sticker]) -> usize {
        transition.state.index_in(list).expect("focus inside list")
    }

    #[test]
    fn test_arrow_down_from_c_lands_on_e() {
        let list = stickers(&["A", "B", "C", "D", "E"]);
        let controller = NavigationController::default();
        let t = press(&controller, FocusState::Focused(list[2].id), Key::ArrowDown, &list)
            .expect("moves");
        assert_eq!(t.state, FocusState::Focused(list[4].id));
        assert!(t.prevents_default());
    }

    #[test]
    fn test_arrow_left_from_a_wraps_to_e() {
        let list = stickers(&["A", "B", "C", "D", "E"]);
        let controller = NavigationController::default();
        let t = press(&controller, FocusState::Focused(list[0].id), Key::ArrowLeft, &list)
            .expect("wraps");
        assert_eq!(t.state, FocusState::Focused(list[4].id));
    }

    #[test]
    fn test_horizontal_moves_wrap_for_every_length() {
        let controller = NavigationController::default();
        for len in 2..=9 {
            let labels: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let list = stickers(&refs);
            for i in 0..len {
                let state = FocusState::Focused(list[i].id);
                let right = press(&controller, state, Key::ArrowRight, &list).expect("right");
                assert_eq!(focused_index(&right, &list), (i + 1) % len);
                let left = press(&controller, state, Key::ArrowLeft, &list).expect("left");
                assert_eq!(focused_index(&left, &list), (i + len - 1) % len);
            }
        }
    }

    #[test]
    fn test_single_sticker_does_not_move() {
        let list = stickers(&["only"]);
        let controller = NavigationController::default();
        let state = FocusState::Focused(list[0].id);
        for key in [Key::ArrowRight, Key::ArrowLeft, Key::ArrowUp, Key::ArrowDown] {
            assert!(press(&controller, state, key, &list).is_none());
        }
    }

    #[test]
    fn test_vertical_moves_clamp_to_list() {
        let controller = NavigationController::new(4);
        for len in 1..=10 {
            let labels: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let list = stickers(&refs);
            for i in 0..len {
                let state = FocusState::Focused(list[i].id);
                let down = (i + 4).min(len - 1);
                match press(&controller, state, Key::ArrowDown, &list) {
                    Some(t) => assert_eq!(focused_index(&t, &list), down),
                    None => assert_eq!(down, i),
                }
                let up = i.saturating_sub(4);
                match press(&controller, state, Key::ArrowUp, &list) {
                    Some(t) => assert_eq!(focused_index(&t, &list), up),
                    None => assert_eq!(up, i),
                }
            }
        }
    }

    #[test]
    fn test_column_count_is_clamped() {
        assert_eq!(NavigationController::new(0).columns(), 1);
        assert_eq!(NavigationController::new(3).columns(), 3);
        assert_eq!(NavigationController::new(65_536).columns(), MAX_COLUMNS);
    }

    #[test]
    fn test_n_opens_composer_unless_input_is_focused() {
        let list = stickers(&["A", "B"]);
        let controller = NavigationController::default();

        for state in [FocusState::Unfocused, FocusState::Focused(list[1].id)] {
            for c in ['n', 'N'] {
                let t = controller
                    .handle_key_event(&state, &KeyEvent::char(c), ActiveElement::None, &list)
                    .expect("composer opens");
                assert_eq!(t.state, FocusState::Composing);
            }
        }

        for active in [
            ActiveElement::TextInput,
            ActiveElement::TextArea,
            ActiveElement::Button,
            ActiveElement::ContentEditable,
        ] {
            assert!(
                controller
                    .handle_key_event(&FocusState::Unfocused, &KeyEvent::char('n'), active, &list)
                    .is_none()
            );
        }

        let with_ctrl = KeyEvent::char('n').with_ctrl();
        assert!(
            controller
                .handle_key_event(&FocusState::Unfocused, &with_ctrl, ActiveElement::None, &list)
                .is_none()
        );
    }

    #[test]
    fn test_arrows_are_ignored_while_an_input_has_focus() {
        let list = stickers(&["A", "B"]);
        let controller = NavigationController::default();
        let state = FocusState::Focused(list[0].id);
        let t = controller.handle_key_event(
            &state,
            &KeyEvent::new(Key::ArrowRight),
            ActiveElement::TextInput,
            &list,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_ctrl_c_copies_without_moving() {
        let list = stickers(&["A", "B"]);
        let controller = NavigationController::default();
        let state = FocusState::Focused(list[1].id);

        for event in [
            KeyEvent::char('c').with_ctrl(),
            KeyEvent::char('c').with_meta(),
        ] {
            let t = controller
                .handle_key_event(&state, &event, ActiveElement::None, &list)
                .expect("copies");
            assert_eq!(t.state, state);
            assert_eq!(t.copied_text(), Some("B"));
        }

        assert!(
            controller
                .handle_key_event(&state, &KeyEvent::char('c'), ActiveElement::None, &list)
                .is_none()
        );
    }

    #[test]
    fn test_escape_clears_focus_even_when_input_is_focused() {
        let list = stickers(&["A"]);
        let controller = NavigationController::default();
        let t = controller
            .handle_key_event(
                &FocusState::Focused(list[0].id),
                &KeyEvent::new(Key::Escape),
                ActiveElement::TextArea,
                &list,
            )
            .expect("unfocuses");
        assert_eq!(t.state, FocusState::Unfocused);

        let t = press(&controller, FocusState::Composing, Key::Escape, &list).expect("closes");
        assert_eq!(t.state, FocusState::Unfocused);
        assert!(press(&controller, FocusState::Unfocused, Key::Escape, &list).is_none());
    }

    #[test]
    fn test_missing_focus_resolves_to_unfocused() {
        let list = stickers(&["A", "B"]);
        let gone = StickerId::new();
        let controller = NavigationController::default();

        assert_eq!(
            controller.reconcile(FocusState::Focused(gone), &list),
            FocusState::Unfocused
        );
        assert_eq!(
            controller.reconcile(FocusState::Focused(list[0].id), &list),
            FocusState::Focused(list[0].id)
        );

        let t = press(&controller, FocusState::Focused(gone), Key::ArrowRight, &list)
            .expect("drops focus");
        assert_eq!(t.state, FocusState::Unfocused);
    }

    #[test]
    fn test_click_focuses_and_copies() {
        let list = stickers(&["A", "B"]);
        let controller = NavigationController::default();
        let t = controller.click(list[0].id, &list).expect("clicked");
        assert_eq!(t.state, FocusState::Focused(list[0].id));
        assert_eq!(t.copied_text(), Some("A"));
        assert!(controller.click(StickerId::new(), &list).is_none());
    }
}
