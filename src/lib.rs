//! # URL Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! Clients store a long URL under an alias (chosen by them or generated),
//! resolve an alias back to its URL, follow an alias as a redirect, and
//! delete aliases.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - ShortLink entity and the storage port
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite implementation of the port
//! - **API Layer** ([`api`]) - Handlers, DTOs, validation and middleware
//!
//! Handlers depend only on the [`domain::repositories::UrlStorage`] trait,
//! so any store (or a mock) can sit behind them.
//!
//! ## HTTP Surface
//!
//! | Method   | Path            | Success                        |
//! |----------|-----------------|--------------------------------|
//! | `POST`   | `/url`          | `{"status":"OK","alias":...}`  |
//! | `POST`   | `/get-url`      | `{"status":"OK","url":...}`    |
//! | `GET`    | `/{alias}`      | `302` to the stored URL        |
//! | `DELETE` | `/url/{alias}`  | `{"status":"OK"}`              |
//!
//! Every failure answers `400` with `{"status":"Error","error":...}`.
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::{StorageError, UrlStorage};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlStorage;
    pub use crate::state::AppState;
}
