//! HTTP-shaped response envelope
//!
//! Responses carry a status code, a JSON-encoded body string and optional
//! headers. Error bodies share a single `{error, code}` shape across all
//! handlers; success bodies are handler-specific.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::ApiError;

/// HTTP-shaped response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code: 200, 400, 404 or 500
    pub status_code: u16,
    /// JSON-encoded body
    pub body: String,
    /// Response headers, if the handler set any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

/// Error response body shared by all handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

impl ApiResponse {
    /// 200 response with a JSON-encoded body
    pub fn ok(body: &impl Serialize) -> Self {
        Self {
            status_code: 200,
            body: serde_json::to_string(body).expect("response body serialization cannot fail"),
            headers: None,
        }
    }

    /// Attach a response header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Error response with the shared `{error, code}` body
    pub fn from_error(err: &ApiError) -> Self {
        let code = err.status_code();
        let body = ErrorBody {
            error: err.to_string(),
            code,
        };
        Self {
            status_code: code,
            body: serde_json::to_string(&body).expect("error body serialization cannot fail"),
            headers: None,
        }
    }

    /// Whether this is a success response
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}
