//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::{Validate, ValidationError};

use crate::api::response::StatusResponse;
use crate::api::validation::ValidatedRequest;

/// Request to store a URL, optionally under a caller-chosen alias.
///
/// Empty strings decode as absent, so `{"alias": ""}` asks for a generated
/// alias and `{"url": ""}` fails the `required` rule. Control characters are
/// rejected in `url`: it is stored as sent and later echoed in a `Location`
/// header.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(required, url, custom(function = "no_control_chars"))]
    pub url: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub alias: Option<String>,
}

fn no_control_chars(url: &str) -> Result<(), ValidationError> {
    if url.chars().any(char::is_control) {
        return Err(ValidationError::new("url"));
    }
    Ok(())
}

impl ValidatedRequest for SaveRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[("url", "URL"), ("alias", "Alias")];
}

/// `{status: "OK", alias}`
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: StatusResponse,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            response: StatusResponse::ok(),
            alias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> SaveRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let request = parse(json!({ "url": "https://example.com", "alias": "ex1" }));
        assert!(request.check().is_ok());
        assert_eq!(request.alias.as_deref(), Some("ex1"));
    }

    #[test]
    fn test_alias_is_optional() {
        let request = parse(json!({ "url": "https://example.com" }));
        assert!(request.check().is_ok());
        assert!(request.alias.is_none());

        let request = parse(json!({ "url": "https://example.com", "alias": "" }));
        assert!(request.check().is_ok());
        assert!(request.alias.is_none());
    }

    #[test]
    fn test_missing_url() {
        let request = parse(json!({ "alias": "ex1" }));
        assert_eq!(request.check().unwrap_err(), "field URL is a required field");

        let request = parse(json!({ "url": "" }));
        assert_eq!(request.check().unwrap_err(), "field URL is a required field");
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let request = parse(json!({ "url": "example.com/page" }));
        assert_eq!(request.check().unwrap_err(), "field URL is not a valid URL");
    }

    #[test]
    fn test_url_with_control_chars_is_rejected() {
        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\r\nb",
            "https://example.com/\tx",
        ] {
            let request = parse(json!({ "url": url }));
            assert_eq!(
                request.check().unwrap_err(),
                "field URL is not a valid URL",
                "{url:?}"
            );
        }
    }

    #[test]
    fn test_response_shape() {
        let value = serde_json::to_value(SaveResponse::ok("ex1".to_string())).unwrap();
        assert_eq!(value, json!({ "status": "OK", "alias": "ex1" }));
    }
}
