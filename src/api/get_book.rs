//! Point lookup handler
//!
//! Reads one book by the `book_id` path parameter. A missing parameter is a
//! 400; a missing record is a 404 with a structured error body.

use crate::observability::Logger;
use crate::store::BookStore;

use super::errors::{ApiError, ApiResult};
use super::event::Event;
use super::response::ApiResponse;

/// Retrieve one book by its identifier.
///
/// Returns 200 with the full record on a hit, 404 on a miss, 400 when the
/// path parameter is absent, 500 when the store read fails.
pub fn get_book(store: &dyn BookStore, event: &Event) -> ApiResponse {
    Logger::info("REQUEST_RECEIVED", &[("handler", "get_book")]);

    match handle(store, event) {
        Ok(response) => response,
        Err(err) => {
            Logger::error(
                "REQUEST_FAILED",
                &[("error", &err.to_string()), ("handler", "get_book")],
            );
            err.into_response()
        }
    }
}

fn handle(store: &dyn BookStore, event: &Event) -> ApiResult<ApiResponse> {
    let book_id = event.path_parameter("book_id")?;

    match store.get(book_id)? {
        Some(book) => {
            Logger::info(
                "BOOK_READ",
                &[("book_id", book_id), ("handler", "get_book")],
            );
            Ok(ApiResponse::ok(&book))
        }
        None => Err(ApiError::NotFound),
    }
}
