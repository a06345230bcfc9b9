//! # stickr-board
//!
//! Everything a board view needs besides drawing: the keyboard
//! navigation/focus controller, the clipboard seam, transient
//! notifications, and [`BoardSession`], which ties them to the folder and
//! sticker repositories with refetch-after-mutation semantics.

pub mod clipboard;
pub mod navigation;
pub mod session;
pub mod toast;

pub use clipboard::{Clipboard, ClipboardError, Osc52Clipboard};
pub use navigation::{
    ActiveElement, FocusState, Key, KeyEvent, Modifiers, NavigationController, SideEffect,
    Transition,
};
pub use session::BoardSession;
pub use toast::{Toast, ToastLevel, ToastQueue};
