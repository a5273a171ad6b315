//! SQLite persistence.
//!
//! [`SqliteUrlStorage`] implements the domain storage port with SQLx. The
//! schema is kept in `migrations/` and applied whenever a store is opened.

pub mod sqlite_url_storage;

pub use sqlite_url_storage::SqliteUrlStorage;
