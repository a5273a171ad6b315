//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::api::middleware::request_id::RequestId;
use crate::domain::repositories::StorageError;
use crate::error::AppError;
use crate::state::AppState;

const OP: &str = "handlers.redirect";

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Answers `302 Found` with a `Location` header; there is no body on
/// success.
///
/// # Errors
///
/// Returns 400 Bad Request with `alias is not found` for an unknown alias
/// and `failed to get URL` on storage failure or when the stored URL cannot
/// be sent as a `Location` header.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    request_id: RequestId,
) -> Result<Response, AppError> {
    match state.storage.get_url(&alias).await {
        Ok(url) => {
            // Rows written outside the API may hold bytes a header cannot carry.
            let location = HeaderValue::from_str(&url).map_err(|e| {
                error!(op = OP, %request_id, %alias, error = %e, "stored url is not a valid location");
                AppError::Request("failed to get URL")
            })?;

            info!(op = OP, %request_id, %alias, %url, "got url");
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Err(StorageError::NotFound) => {
            error!(op = OP, %request_id, %alias, "alias is not found");
            Err(AppError::Request("alias is not found"))
        }
        Err(e) => {
            error!(op = OP, %request_id, error = %e, "failed to get URL");
            Err(AppError::Request("failed to get URL"))
        }
    }
}
