//! Handler error taxonomy
//!
//! Every handler failure is one of four kinds, each mapped to a fixed HTTP
//! status code. Nothing is retried and nothing propagates past the handler
//! boundary.

use thiserror::Error;

use crate::store::StoreError;

use super::response::ApiResponse;

/// Result type for handler-internal fallible steps
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (400)
    // ==================
    /// Missing or malformed request envelope
    #[error("Invalid request: {0}")]
    Structural(String),

    /// A required field is absent or unusable
    #[error("{0}")]
    Validation(String),

    // ==================
    // Not Found (404)
    // ==================
    /// Point lookup found no record
    #[error("Book not found")]
    NotFound,

    // ==================
    // Server Errors (500)
    // ==================
    /// Store failure of any kind
    #[error("Internal server error: {0}")]
    Storage(#[from] StoreError),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Structural(_) => 400,
            ApiError::Validation(_) => 400,
            ApiError::NotFound => 404,
            ApiError::Storage(_) => 500,
        }
    }

    /// Convert into the HTTP-shaped error response
    pub fn into_response(self) -> ApiResponse {
        ApiResponse::from_error(&self)
    }
}
