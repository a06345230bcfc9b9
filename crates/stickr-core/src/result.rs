//! Convenience result type alias for Stickr.

use crate::error::AppError;

/// A specialized `Result` type for Stickr operations.
pub type AppResult<T> = Result<T, AppError>;
