//! HTTP request handlers.
//!
//! Each handler runs the same sequence: decode the request, validate it,
//! call the storage port once, then map the outcome to a response. Every
//! log line carries the handler's `op` name and the request's correlation id.

pub mod delete;
pub mod redirect;
pub mod retrieve;
pub mod save;

pub use delete::delete_handler;
pub use redirect::redirect_handler;
pub use retrieve::retrieve_handler;
pub use save::save_handler;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::api::middleware::request_id::RequestId;
use crate::error::AppError;

/// Decodes a JSON request body whatever `Content-Type` the client sent.
///
/// Only an unreadable body or a payload that is not the expected JSON maps
/// to [`AppError::Decode`].
fn decode_body<T: DeserializeOwned>(
    op: &'static str,
    request_id: &RequestId,
    body: Result<Bytes, BytesRejection>,
) -> Result<T, AppError> {
    let body = body.map_err(|e| {
        error!(op, %request_id, error = %e, "failed to read request body");
        AppError::Decode
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        error!(op, %request_id, error = %e, "failed to decode request body");
        AppError::Decode
    })
}

#[cfg(test)]
pub(crate) fn test_server(
    storage: crate::domain::repositories::MockUrlStorage,
) -> axum_test::TestServer {
    use crate::state::AppState;
    use std::sync::Arc;

    let app = crate::api::routes::url_routes().with_state(AppState::new(Arc::new(storage)));

    axum_test::TestServer::new(app).unwrap()
}
