//! Request handler layer
//!
//! Four independent handlers, each mapping one HTTP-shaped [`Event`] to one
//! [`ApiResponse`] through a single store call:
//!
//! - [`add_book`] - strict create, all four fields required
//! - [`save_book`] - lenient create, identifier generated when absent
//! - [`list_books`] - full scan, three-field projection
//! - [`get_book`] - point lookup by path parameter
//!
//! # Design Principles
//!
//! - One store call per invocation, no retries
//! - Every failure maps to exactly one of four HTTP outcomes
//! - Handlers hold no state; the store is injected by the caller

mod add_book;
mod errors;
mod event;
mod get_book;
mod list_books;
mod response;
mod save_book;

pub use add_book::add_book;
pub use errors::{ApiError, ApiResult};
pub use event::Event;
pub use get_book::get_book;
pub use list_books::list_books;
pub use response::{ApiResponse, ErrorBody};
pub use save_book::save_book;
