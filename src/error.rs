//! Handler-level error type and its HTTP rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::response::StatusResponse;

/// A failed request.
///
/// Every variant renders as `400 Bad Request` with a `{status: "Error", error}`
/// body. Messages are user-safe; storage driver detail is logged by the
/// handler before the error is built and never ends up here.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be parsed.
    #[error("failed to decode request")]
    Decode,

    /// One or more field rules failed; holds the joined violation messages.
    #[error("{0}")]
    Validation(String),

    /// The storage call failed; holds the per-handler message.
    #[error("{0}")]
    Request(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = StatusResponse::error(self.to_string());
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AppError::Decode.to_string(), "failed to decode request");
        assert_eq!(
            AppError::Validation("field URL is a required field".into()).to_string(),
            "field URL is a required field"
        );
        assert_eq!(
            AppError::Request("url already exists").to_string(),
            "url already exists"
        );
    }

    #[test]
    fn test_status_is_bad_request() {
        let response = AppError::Request("invalid request").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
