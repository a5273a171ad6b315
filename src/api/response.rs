//! Common JSON envelope shared by every endpoint.

use serde::Serialize;

/// Outcome marker carried in every JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// `{status, error?}` body.
///
/// Endpoint responses embed this with `#[serde(flatten)]` and add their own
/// payload field next to it.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }
}
