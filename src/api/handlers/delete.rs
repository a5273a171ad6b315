//! Handler for alias deletion.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::api::middleware::request_id::RequestId;
use crate::api::response::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

const OP: &str = "handlers.delete";

/// Deletes the link stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// Deleting an alias that does not exist is not an error.
///
/// # Errors
///
/// Returns 400 Bad Request with `invalid request` on storage failure.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    request_id: RequestId,
) -> Result<Json<StatusResponse>, AppError> {
    if let Err(e) = state.storage.delete_url(&alias).await {
        error!(op = OP, %request_id, error = %e, "invalid request");
        return Err(AppError::Request("invalid request"));
    }

    info!(op = OP, %request_id, %alias, "alias was deleted");

    Ok(Json(StatusResponse::ok()))
}
