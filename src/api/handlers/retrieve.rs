//! Handler for resolving an alias to its URL as JSON.

use axum::{Json, body::Bytes, extract::State, extract::rejection::BytesRejection};
use tracing::{debug, error, info};

use crate::api::dto::retrieve::{RetrieveRequest, RetrieveResponse};
use crate::api::handlers::decode_body;
use crate::api::middleware::request_id::RequestId;
use crate::api::validation::ValidatedRequest;
use crate::domain::repositories::StorageError;
use crate::error::AppError;
use crate::state::AppState;

const OP: &str = "handlers.url.retrieve";

/// Looks up the URL stored under an alias.
///
/// # Endpoint
///
/// `POST /get-url`
///
/// # Request Body
///
/// ```json
/// { "alias": "ex1" }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `url is not found` for an unknown alias and
/// `failed to get URL` on storage failure.
pub async fn retrieve_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RetrieveResponse>, AppError> {
    let request: RetrieveRequest = decode_body(OP, &request_id, body)?;

    debug!(op = OP, %request_id, "request body decoded");

    if let Err(message) = request.check() {
        error!(op = OP, %request_id, %message, "invalid request");
        return Err(AppError::Validation(message));
    }

    let alias = request.alias.unwrap_or_default();

    match state.storage.get_url(&alias).await {
        Ok(url) => {
            info!(op = OP, %request_id, %url, "url retrieved");
            Ok(Json(RetrieveResponse::ok(url)))
        }
        Err(StorageError::NotFound) => {
            error!(op = OP, %request_id, %alias, "url is not found");
            Err(AppError::Request("url is not found"))
        }
        Err(e) => {
            error!(op = OP, %request_id, error = %e, "failed to get URL");
            Err(AppError::Request("failed to get URL"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_server;
    use crate::domain::repositories::MockUrlStorage;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_retrieve_success() {
        let mut storage = MockUrlStorage::new();
        storage
            .expect_get_url()
            .withf(|alias| alias == "Google")
            .times(1)
            .returning(|_| Ok("https://google.com".to_string()));

        let server = test_server(storage);
        let response = server
            .post("/get-url")
            .json(&json!({ "alias": "Google" }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": "OK", "url": "https://google.com" })
        );
    }

    #[tokio::test]
    async fn test_retrieve_empty_alias() {
        let server = test_server(MockUrlStorage::new());
        let response = server
            .post("/get-url")
            .json(&json!({ "alias": "" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": "Error", "error": "field Alias is a required field" })
        );
    }

    #[tokio::test]
    async fn test_retrieve_unknown_alias() {
        let mut storage = MockUrlStorage::new();
        storage
            .expect_get_url()
            .times(1)
            .returning(|_| Err(StorageError::NotFound));

        let server = test_server(storage);
        let response = server
            .post("/get-url")
            .json(&json!({ "alias": "InvalidAlias" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"], "url is not found");
    }

    #[tokio::test]
    async fn test_retrieve_storage_failure() {
        let mut storage = MockUrlStorage::new();
        storage
            .expect_get_url()
            .times(1)
            .returning(|_| Err(StorageError::Database(sqlx::Error::PoolClosed)));

        let server = test_server(storage);
        let response = server
            .post("/get-url")
            .json(&json!({ "alias": "yandex.ru" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"], "failed to get URL");
    }

    #[tokio::test]
    async fn test_retrieve_non_json_body() {
        let server = test_server(MockUrlStorage::new());
        let response = server.post("/get-url").text("alias=ex1").await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["error"],
            "failed to decode request"
        );
    }

    #[tokio::test]
    async fn test_retrieve_malformed_json() {
        let server = test_server(MockUrlStorage::new());
        let response = server
            .post("/get-url")
            .text("{\"alias\": ")
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": "Error", "error": "failed to decode request" })
        );
    }

    #[tokio::test]
    async fn test_retrieve_json_body_as_plain_text() {
        let mut storage = MockUrlStorage::new();
        storage
            .expect_get_url()
            .withf(|alias| alias == "ex1")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let server = test_server(storage);
        let response = server.post("/get-url").text(r#"{"alias":"ex1"}"#).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": "OK", "url": "https://example.com" })
        );
    }
}
