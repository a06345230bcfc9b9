//! Custom extractors and path helpers.

pub mod json;
pub mod path;

pub use json::ValidatedJson;
pub use path::{parse_folder_id, parse_sticker_id};
