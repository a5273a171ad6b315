//! Storage port definitions for the domain layer.
//!
//! Handlers only ever see the [`UrlStorage`] trait. The concrete engine lives
//! in `crate::infrastructure::persistence`, and a `mockall` double is
//! generated for unit tests.

pub mod url_storage;

pub use url_storage::{StorageError, UrlStorage};

#[cfg(test)]
pub use url_storage::MockUrlStorage;
