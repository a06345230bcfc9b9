//! Board view configuration.

use serde::{Deserialize, Serialize};

/// Settings for the interactive sticker board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Column count assumed by vertical arrow navigation, clamped to
    /// `1..=12` by the board. Fixed; it does not follow the rendered layout.
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
    /// How long a transient notification stays visible.
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_columns: default_grid_columns(),
            toast_seconds: default_toast_seconds(),
        }
    }
}

fn default_grid_columns() -> usize {
    4
}

fn default_toast_seconds() -> u64 {
    3
}
