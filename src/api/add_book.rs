//! Strict create handler
//!
//! All four book fields must be present and non-empty; the record is stored
//! verbatim.

use crate::model::Book;
use crate::observability::Logger;
use crate::store::BookStore;

use super::errors::{ApiError, ApiResult};
use super::event::{string_field, Event};
use super::response::ApiResponse;

const REQUIRED_FIELDS_MESSAGE: &str =
    "Missing one or more required fields: 'book_id', 'title', 'author', 'cover_image'";

/// Store one book from a fully-specified request body.
///
/// Returns 400 when the body is missing, malformed, or lacks any of the
/// four required fields; 500 when the store write fails.
pub fn add_book(store: &dyn BookStore, event: &Event) -> ApiResponse {
    Logger::info("REQUEST_RECEIVED", &[("handler", "add_book")]);

    match handle(store, event) {
        Ok(response) => response,
        Err(err) => {
            Logger::error(
                "REQUEST_FAILED",
                &[("error", &err.to_string()), ("handler", "add_book")],
            );
            err.into_response()
        }
    }
}

fn handle(store: &dyn BookStore, event: &Event) -> ApiResult<ApiResponse> {
    let body = event.json_body()?;

    let book_id = string_field(&body, "book_id")?;
    let title = string_field(&body, "title")?;
    let author = string_field(&body, "author")?;
    let cover_image = string_field(&body, "cover_image")?;

    // All four present and non-empty, reported as one validation failure
    let (book_id, title, author, cover_image) = match (book_id, title, author, cover_image) {
        (Some(book_id), Some(title), Some(author), Some(cover_image))
            if !book_id.is_empty()
                && !title.is_empty()
                && !author.is_empty()
                && !cover_image.is_empty() =>
        {
            (book_id, title, author, cover_image)
        }
        _ => return Err(ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    };

    let book = Book::new(book_id, title, author, cover_image);
    let book_id = book.book_id.clone();
    store.put(book)?;
    Logger::info(
        "BOOK_STORED",
        &[("book_id", &book_id), ("handler", "add_book")],
    );

    Ok(ApiResponse::ok(&"Book added successfully!"))
}
