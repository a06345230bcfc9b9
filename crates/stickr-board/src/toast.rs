//! Transient notifications shown after board actions.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A notification that disappears at `expires_at`.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

/// Recent notifications, newest last. Older entries are dropped once the
/// queue holds more than a handful.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    toasts: VecDeque<Toast>,
}

const MAX_VISIBLE: usize = 3;

impl ToastQueue {
    /// Create a queue whose toasts live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            toasts: VecDeque::new(),
        }
    }

    /// Show a success notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into(), Instant::now());
    }

    /// Show an error notification.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into(), Instant::now());
    }

    fn push(&mut self, level: ToastLevel, message: String, now: Instant) {
        self.toasts.push_back(Toast {
            message,
            level,
            expires_at: now + self.ttl,
        });
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Remove expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    /// Dismiss every toast.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Toasts that have not been pruned, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// The most recent toast.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
