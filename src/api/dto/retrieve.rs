//! DTOs for the retrieve endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::api::response::StatusResponse;
use crate::api::validation::ValidatedRequest;

/// Request to resolve an alias without redirecting.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct RetrieveRequest {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(required)]
    pub alias: Option<String>,
}

impl ValidatedRequest for RetrieveRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[("alias", "Alias")];
}

/// `{status: "OK", url}`
#[derive(Debug, Serialize)]
pub struct RetrieveResponse {
    #[serde(flatten)]
    pub response: StatusResponse,
    pub url: String,
}

impl RetrieveResponse {
    pub fn ok(url: String) -> Self {
        Self {
            response: StatusResponse::ok(),
            url,
        }
    }
}
