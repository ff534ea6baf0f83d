//! Lenient create handler
//!
//! Accepts a partial book: the identifier is generated when absent and the
//! cover image defaults to the empty string. Title and author are still
//! required. This is a second write path, not a lookup.

use uuid::Uuid;

use crate::model::Book;
use crate::observability::Logger;
use crate::store::BookStore;

use super::errors::{ApiError, ApiResult};
use super::event::{string_field, Event};
use super::response::ApiResponse;

/// Store one book from a partial request body.
///
/// `title` and `author` are required; `book_id` is generated as a UUIDv4
/// when absent and `cover_image` defaults to the empty string. Returns 400
/// on a missing/malformed body or missing required field, 500 when the
/// store write fails.
pub fn save_book(store: &dyn BookStore, event: &Event) -> ApiResponse {
    Logger::info("REQUEST_RECEIVED", &[("handler", "save_book")]);

    match handle(store, event) {
        Ok(response) => response,
        Err(err) => {
            Logger::error(
                "REQUEST_FAILED",
                &[("error", &err.to_string()), ("handler", "save_book")],
            );
            err.into_response()
        }
    }
}

fn handle(store: &dyn BookStore, event: &Event) -> ApiResult<ApiResponse> {
    let body = event.json_body()?;

    let title = string_field(&body, "title")?
        .ok_or_else(|| ApiError::Validation("Missing required field: 'title'".to_string()))?;
    let author = string_field(&body, "author")?
        .ok_or_else(|| ApiError::Validation("Missing required field: 'author'".to_string()))?;

    // Generated when the caller does not supply one
    let book_id = match string_field(&body, "book_id")? {
        Some(book_id) => book_id,
        None => Uuid::new_v4().to_string(),
    };
    let cover_image = string_field(&body, "cover_image")?.unwrap_or_default();

    let book = Book::new(book_id, title, author, cover_image);
    let book_id = book.book_id.clone();
    store.put(book)?;
    Logger::info(
        "BOOK_STORED",
        &[("book_id", &book_id), ("handler", "save_book")],
    );

    Ok(ApiResponse::ok(&"Book added successfully!").with_header("Content-Type", "application/json"))
}
