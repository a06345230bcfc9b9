//! PostgreSQL implementations of the store traits.

pub mod folder;
pub mod sticker;

pub use folder::FolderRepository;
pub use sticker::StickerRepository;

use stickr_core::error::{AppError, ErrorKind};

/// Map a sqlx failure into the store error contract.
///
/// Unique violations become conflicts and foreign-key violations become
/// not-found, so callers can tell a lost insert race or a vanished folder
/// apart from an outage.
pub(crate) fn store_error(err: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return AppError::conflict(format!("{context}: duplicate key"));
        }
        if db_err.is_foreign_key_violation() {
            return AppError::not_found(format!("{context}: referenced folder does not exist"));
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}
