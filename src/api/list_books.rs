//! List handler
//!
//! Full single-pass scan projected to `{book_id, title, author}`. There is
//! no pagination: a large collection comes back as one batch.

use crate::model::BookSummary;
use crate::observability::Logger;
use crate::store::BookStore;

use super::errors::ApiResult;
use super::event::Event;
use super::response::ApiResponse;

/// List every stored book as a three-field summary.
///
/// Returns 200 with a JSON array (empty when the store is empty); 500 when
/// the scan fails.
pub fn list_books(store: &dyn BookStore, _event: &Event) -> ApiResponse {
    Logger::info("REQUEST_RECEIVED", &[("handler", "list_books")]);

    match handle(store) {
        Ok(response) => response,
        Err(err) => {
            Logger::error(
                "REQUEST_FAILED",
                &[("error", &err.to_string()), ("handler", "list_books")],
            );
            err.into_response()
        }
    }
}

fn handle(store: &dyn BookStore) -> ApiResult<ApiResponse> {
    let books = store.scan()?;
    let summaries: Vec<BookSummary> = books.iter().map(|book| book.summary()).collect();

    Logger::info(
        "SCAN_COMPLETE",
        &[
            ("count", &summaries.len().to_string()),
            ("handler", "list_books"),
        ],
    );

    Ok(ApiResponse::ok(&summaries))
}
