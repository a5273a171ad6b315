//! Handler for storing a URL under an alias.

use axum::{Json, body::Bytes, extract::State, extract::rejection::BytesRejection};
use tracing::{debug, error, info};

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::api::handlers::decode_body;
use crate::api::middleware::request_id::RequestId;
use crate::api::validation::ValidatedRequest;
use crate::domain::repositories::StorageError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::alias_generator::generate_alias;

const OP: &str = "handlers.url.save";

/// Stores a URL and returns its alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex1" }
/// ```
///
/// `alias` is optional. When it is missing or empty a random 12 character
/// alias is generated and echoed back.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex1" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{status: "Error", error}` when the body
/// cannot be decoded, a field rule fails, the alias is taken
/// (`url already exists`) or storage fails (`failed to add url`).
pub async fn save_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let request: SaveRequest = decode_body(OP, &request_id, body)?;

    debug!(op = OP, %request_id, "request body decoded");

    if let Err(message) = request.check() {
        error!(op = OP, %request_id, %message, "invalid request");
        return Err(AppError::Validation(message));
    }

    let url = request.url.unwrap_or_default();
    let alias = request.alias.unwrap_or_else(generate_alias);

    match state.storage.save_url(&url, &alias).await {
        Ok(id) => {
            info!(op = OP, %request_id, id, %alias, "url added");
            Ok(Json(SaveResponse::ok(alias)))
        }
        Err(StorageError::AlreadyExists) => {
            error!(op = OP, %request_id, %url, %alias, "url already exists");
            Err(AppError::Request("url already exists"))
        }
        Err(e) => {
            error!(op = OP, %request_id, error = %e, "failed to add url");
            Err(AppError::Request("failed to add url"))
        }
    }
}
