//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs carry their field rules as `validator` attributes and
//! implement [`crate::api::validation::ValidatedRequest`].

pub mod retrieve;
pub mod save;
