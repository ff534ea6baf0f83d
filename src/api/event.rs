//! HTTP-shaped request envelope
//!
//! An [`Event`] is the platform-independent request shape handed to every
//! handler: an optional JSON body plus path parameters. The hosting layer
//! (HTTP server, test harness) builds events; handlers only read them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};

/// HTTP-shaped request envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    /// Raw JSON request body, if any
    #[serde(default)]
    pub body: Option<String>,
    /// Path parameters extracted by the router
    #[serde(default)]
    pub path_parameters: HashMap<String, String>,
}

impl Event {
    /// Empty event: no body, no path parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Event carrying the given raw body
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Attach a path parameter
    pub fn with_path_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    /// Parse the body as a JSON object.
    ///
    /// Fails structurally when the body is absent, is not valid JSON, or is
    /// not a JSON object.
    pub fn json_body(&self) -> ApiResult<Map<String, Value>> {
        let raw = self
            .body
            .as_deref()
            .ok_or_else(|| ApiError::Structural("missing request body".to_string()))?;

        let value: Value = serde_json::from_str(raw)
            .map_err(|e| ApiError::Structural(format!("invalid JSON: {}", e)))?;

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ApiError::Structural(
                "body is not a JSON object".to_string(),
            )),
        }
    }

    /// Required path parameter
    pub fn path_parameter(&self, name: &str) -> ApiResult<&str> {
        self.path_parameters
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ApiError::Structural(format!("missing path parameter: '{}'", name)))
    }
}

/// Optional string field from a parsed body.
///
/// `null` counts as absent; a present non-string value is a validation
/// error, since every book attribute is a string.
pub(crate) fn string_field(body: &Map<String, Value>, name: &str) -> ApiResult<Option<String>> {
    match body.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::Validation(format!(
            "Field '{}' must be a string",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_body_missing() {
        let err = Event::new().json_body().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("missing request body"));
    }

    #[test]
    fn test_json_body_malformed() {
        let err = Event::with_body("{not json").json_body().unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_json_body_non_object() {
        let err = Event::with_body("[1, 2, 3]").json_body().unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_json_body_object() {
        let body = Event::with_body(json!({"title": "T"}).to_string())
            .json_body()
            .unwrap();
        assert_eq!(body.get("title").unwrap(), "T");
    }

    #[test]
    fn test_path_parameter() {
        let event = Event::new().with_path_parameter("book_id", "b1");
        assert_eq!(event.path_parameter("book_id").unwrap(), "b1");
        assert!(event.path_parameter("other").is_err());
    }

    #[test]
    fn test_string_field_null_is_absent() {
        let body = Event::with_body(json!({"title": null}).to_string())
            .json_body()
            .unwrap();
        assert!(string_field(&body, "title").unwrap().is_none());
    }

    #[test]
    fn test_string_field_rejects_non_string() {
        let body = Event::with_body(json!({"title": 42}).to_string())
            .json_body()
            .unwrap();
        assert!(string_field(&body, "title").is_err());
    }
}
