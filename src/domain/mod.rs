//! Domain layer: the ShortLink entity and the storage port.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait and its error kinds
//!
//! Nothing here depends on the HTTP layer or on a concrete database.

pub mod entities;
pub mod repositories;
