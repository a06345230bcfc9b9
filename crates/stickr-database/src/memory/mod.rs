//! In-process store used for tests and the `memory` provider.

pub mod store;

pub use store::MemoryStore;
