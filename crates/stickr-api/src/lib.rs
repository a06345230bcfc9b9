//! # stickr-api
//!
//! HTTP API layer for Stickr built on Axum.
//!
//! Exposes the folder and sticker repositories as JSON endpoints under
//! `/api`, with CORS, compression, tracing, request logging, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
