//! Per-request correlation ids.
//!
//! [`set_layer`] stamps every inbound request with an `x-request-id` header
//! (keeping one supplied by the client), and [`propagate_layer`] copies it
//! onto the response. Handlers receive the id explicitly through the
//! [`RequestId`] extractor and attach it to every log line.

use std::convert::Infallible;
use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    self, MakeRequestId, PropagateRequestIdLayer, SetRequestIdLayer,
};

/// Header carrying the correlation id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a fresh 16 hex character id from the OS random source.
pub fn generate_request_id() -> String {
    let mut buffer = [0u8; 8];
    getrandom::fill(&mut buffer).expect("OS random source unavailable");
    hex::encode(buffer)
}

/// [`MakeRequestId`] backed by [`generate_request_id`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRandomRequestId;

impl MakeRequestId for MakeRandomRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<request_id::RequestId> {
        HeaderValue::from_str(&generate_request_id())
            .ok()
            .map(request_id::RequestId::new)
    }
}

/// Assigns an id to requests that arrive without one. Apply outermost.
pub fn set_layer() -> SetRequestIdLayer<MakeRandomRequestId> {
    SetRequestIdLayer::new(X_REQUEST_ID, MakeRandomRequestId)
}

/// Echoes the request id on the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

/// Correlation id of the current request.
///
/// Read from the `x-request-id` header set by [`set_layer`]. When a handler
/// is mounted without that layer a fresh id is generated, so extraction
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(generate_request_id);

        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_hex() {
        let id = generate_request_id();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_extracts_header() {
        let (mut parts, _) = Request::builder()
            .header("x-request-id", "abc123")
            .body(())
            .unwrap()
            .into_parts();

        let id = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[tokio::test]
    async fn test_generates_when_missing() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let id = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(id.as_str().len(), 16);
    }
}
