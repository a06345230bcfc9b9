//! Tower layers and Axum middleware.

pub mod cors;
pub mod logging;
