//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into storage operations and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Correlation ids and request tracing
//! - [`response`] - Shared `{status, error}` envelope
//! - [`routes`] - Route configuration
//! - [`validation`] - Rendering of field rule violations

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod validation;
