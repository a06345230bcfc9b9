//! Terminal key events to board key events and host actions.

use crossterm::event::{KeyCode, KeyModifiers};

use stickr_board::{Key, KeyEvent, Modifiers};

/// Convert a crossterm key press.
pub fn to_board_event(event: &crossterm::event::KeyEvent) -> KeyEvent {
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        _ => Key::Other,
    };

    KeyEvent {
        key,
        modifiers: Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            meta: event
                .modifiers
                .intersects(KeyModifiers::SUPER | KeyModifiers::META),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        },
    }
}

/// Board keys the controller leaves to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Quit,
    FocusFirst,
    CopyFocused,
    DeleteFocused,
    CycleColor,
    StartRename,
    ToggleDarkMode,
    Share,
    ConfirmDeleteFolder,
    Refresh,
    DismissToasts,
}

/// Host binding for a key the controller did not consume.
pub fn board_action(event: &KeyEvent) -> Option<BoardAction> {
    if event.modifiers.command() {
        return None;
    }
    let action = match event.key {
        Key::Char('q') => BoardAction::Quit,
        Key::Tab => BoardAction::FocusFirst,
        Key::Enter => BoardAction::CopyFocused,
        Key::Char('d') | Key::Delete => BoardAction::DeleteFocused,
        Key::Char('c') => BoardAction::CycleColor,
        Key::Char('r') => BoardAction::StartRename,
        Key::Char('t') => BoardAction::ToggleDarkMode,
        Key::Char('s') => BoardAction::Share,
        Key::Char('D') => BoardAction::ConfirmDeleteFolder,
        Key::Char('g') => BoardAction::Refresh,
        Key::Char('x') => BoardAction::DismissToasts,
        _ => return None,
    };
    Some(action)
}

/// Edit a single-line or multi-line text buffer. Returns whether the key
/// changed the buffer.
pub fn edit_text(buffer: &mut String, event: &KeyEvent, multiline: bool) -> bool {
    match event.key {
        Key::Backspace => buffer.pop().is_some(),
        Key::Enter if multiline && event.modifiers.alt => {
            buffer.push('\n');
            true
        }
        Key::Char(c) if !event.modifiers.command() => {
            buffer.push(c);
            true
        }
        _ => false,
    }
}
