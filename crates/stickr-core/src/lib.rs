//! # stickr-core
//!
//! Core crate for Stickr. Contains configuration schemas, typed
//! identifiers, the sticker palette, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Stickr crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
