//! External concerns: catalog storage.

pub mod storage;

pub use storage::{CatalogRepository, InMemoryCatalogRepository, LockSettings};
