//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite implementation of the storage port
pub mod persistence;
