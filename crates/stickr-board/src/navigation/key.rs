//! Host-neutral key events.

/// A key, independent of the terminal or browser that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Other,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// A printable character with no modifiers.
    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    /// The same key with Ctrl held.
    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// The same key with Meta (Cmd) held.
    pub fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }
}

/// What currently holds input focus in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveElement {
    /// Nothing in particular; the board itself.
    #[default]
    None,
    TextInput,
    TextArea,
    Button,
    ContentEditable,
}

impl ActiveElement {
    /// Whether keystrokes belong to this element rather than the board.
    pub fn captures_keys(&self) -> bool {
        !matches!(self, Self::None)
    }
}
