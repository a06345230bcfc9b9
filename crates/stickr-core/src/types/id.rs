//! Typed identifiers for folders and stickers.
//!
//! A [`FolderId`] is an opaque, URL-safe token chosen by the client (or
//! generated here) and used verbatim in share links. A [`StickerId`] is a
//! time-ordered UUID assigned by the store layer. With the `sqlx` feature
//! both types encode transparently as their inner column type.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Length of generated folder ids.
pub const GENERATED_FOLDER_ID_LEN: usize = 8;

/// Upper bound on the length of client-supplied folder ids.
pub const MAX_FOLDER_ID_LEN: usize = 64;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier of a folder, and the only access token it has.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct FolderId(String);

impl FolderId {
    /// Validate a client-supplied id.
    ///
    /// Accepts 1 to 64 characters from `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() {
            return Err(AppError::validation("Folder id cannot be empty"));
        }
        if raw.len() > MAX_FOLDER_ID_LEN {
            return Err(AppError::validation(format!(
                "Folder id exceeds {MAX_FOLDER_ID_LEN} characters"
            )));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(AppError::validation(format!(
                "Folder id contains invalid character '{bad}'"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    /// Generate a fresh random id of eight lowercase base-36 characters.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let token: String = (0..GENERATED_FOLDER_ID_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        Self(token)
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FolderId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FolderId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FolderId> for String {
    fn from(id: FolderId) -> String {
        id.0
    }
}

/// Identifier of a sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct StickerId(pub Uuid);

impl StickerId {
    /// Create a new time-ordered identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for StickerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StickerId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AppError::validation(format!("Invalid sticker id: {s}")))
    }
}

impl From<Uuid> for StickerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
