//! Keyboard navigation and focus over a sticker grid.
//!
//! The controller is a pure function of the current [`FocusState`], the
//! key event, what element holds input focus, and the last-loaded sticker
//! list. Hosts apply the returned [`Transition`] and run its effects.

pub mod controller;
pub mod key;
pub mod state;

pub use controller::{DEFAULT_COLUMNS, MAX_COLUMNS, NavigationController, SideEffect, Transition};
pub use key::{ActiveElement, Key, KeyEvent, Modifiers};
pub use state::FocusState;
