//! Storage port for short link persistence.

use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a [`UrlStorage`] implementation.
///
/// Handlers match on these variants exhaustively; the driver-level variants
/// carry detail for logs only and are never shown to API clients.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("url not found")]
    NotFound,

    #[error("url exists")]
    AlreadyExists,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence interface the HTTP handlers depend on.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlStorage`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStorage: Send + Sync {
    /// Stores `url` under `alias` and returns the new record id.
    ///
    /// The insert is atomic: on failure nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] if the alias is taken.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record has this alias.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the record stored under `alias`.
    ///
    /// Deleting an alias that does not exist succeeds.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}
