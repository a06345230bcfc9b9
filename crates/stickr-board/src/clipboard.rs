//! Clipboard access for copy actions.
//!
//! Terminals receive text through the OSC 52 escape sequence, which most
//! emulators (and tmux with `set-clipboard on`) forward to the system
//! clipboard, including over SSH.

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Payloads above this size are refused by many terminals.
pub const MAX_OSC52_BYTES: usize = 74_994;

/// Clipboard write failure. Never fatal to the board.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),
    #[error("text is too large for the terminal clipboard ({len} bytes, max {max})")]
    TooLarge { len: usize, max: usize },
}

/// Somewhere copied text can be written.
pub trait Clipboard: Send {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that writes OSC 52 sequences to a terminal.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    /// Write to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the clipboard and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.len() > MAX_OSC52_BYTES {
            return Err(ClipboardError::TooLarge {
                len: text.len(),
                max: MAX_OSC52_BYTES,
            });
        }
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Test clipboard that records writes and can be told to fail.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingClipboard {
    pub(crate) writes: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    pub(crate) fail: bool,
}

#[cfg(test)]
impl RecordingClipboard {
    pub(crate) fn last(&self) -> Option<String> {
        self.writes.lock().ok()?.last().cloned()
    }
}

#[cfg(test)]
impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Io(io::Error::other("no clipboard")));
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}
