//! HTTP middleware for request processing.
//!
//! Provides correlation ids and request/response tracing.

pub mod request_id;
pub mod tracing;
