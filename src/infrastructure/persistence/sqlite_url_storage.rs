//! SQLite implementation of the storage port.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{StorageError, UrlStorage};

/// SQLite-backed short link store.
///
/// Alias uniqueness is enforced by a `UNIQUE` constraint, so concurrent saves
/// of the same alias are serialized by the database itself.
#[derive(Clone)]
pub struct SqliteUrlStorage {
    pool: SqlitePool,
}

impl SqliteUrlStorage {
    /// Opens (creating if missing) the database at `path` and applies migrations.
    ///
    /// `path` may be a bare filesystem path or a `sqlite:` URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn connect(path: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(path)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Opens a private in-memory database.
    ///
    /// The pool holds a single connection that is never recycled, because the
    /// database disappears with its last connection.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Lists stored links ordered by id.
    pub async fn list(&self, limit: i64) -> Result<Vec<ShortLink>, StorageError> {
        let rows: Vec<(i64, String, String)> =
            sqlx::query_as("SELECT id, alias, url FROM url ORDER BY id LIMIT ?")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, alias, url)| ShortLink::new(id, alias, url))
            .collect())
    }

    /// Counts stored links.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM url")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Round-trips a trivial query to check the database is reachable.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UrlStorage for SqliteUrlStorage {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::AlreadyExists
                } else {
                    StorageError::Database(e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await?;

        url.ok_or(StorageError::NotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await?;

        tracing::debug!(alias, rows = result.rows_affected(), "delete executed");

        Ok(())
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
