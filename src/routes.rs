//! Top-level router configuration.
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request id** - assigns `x-request-id` to requests lacking one
//! - **Tracing** - structured request/response logging
//! - **Request id propagation** - echoes `x-request-id` on the response
//! - **Panic recovery** - a panicking handler yields 500 instead of a dropped connection
//! - **Timeout** - requests running past the deadline get 408
//! - **Path normalization** - trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline for a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(layered_router(state, request_timeout))
}

/// Routes plus every middleware except path normalization.
///
/// `NormalizePath` has to wrap the router from outside, so this is the
/// largest piece that is still a plain [`Router`].
pub fn layered_router(state: AppState, request_timeout: Duration) -> Router {
    api::routes::url_routes()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CatchPanicLayer::new())
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}
