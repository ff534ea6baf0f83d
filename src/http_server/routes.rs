//! Route adapters
//!
//! Thin glue between axum and the handler layer: each route builds an
//! [`Event`] from the HTTP request, invokes one handler, and maps the
//! [`ApiResponse`] back onto the wire verbatim (status, body, headers).

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{self, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::api::{self, ApiResponse, Event};
use crate::store::BookStore;

/// State shared by all book routes
pub struct AppState {
    /// The injected store backend
    pub store: Arc<dyn BookStore>,
}

/// Create the book routes
pub fn book_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/books",
            get(list_books_route)
                .post(add_book_route)
                .put(save_book_route),
        )
        .route("/books/{book_id}", get(get_book_route))
        .with_state(state)
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the health route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_route))
}

async fn health_route() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

async fn add_book_route(State(state): State<Arc<AppState>>, body: String) -> Response {
    let event = event_with_body(body);
    into_http_response(api::add_book(state.store.as_ref(), &event))
}

async fn save_book_route(State(state): State<Arc<AppState>>, body: String) -> Response {
    let event = event_with_body(body);
    into_http_response(api::save_book(state.store.as_ref(), &event))
}

async fn list_books_route(State(state): State<Arc<AppState>>) -> Response {
    into_http_response(api::list_books(state.store.as_ref(), &Event::new()))
}

async fn get_book_route(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Response {
    let event = Event::new().with_path_parameter("book_id", book_id);
    into_http_response(api::get_book(state.store.as_ref(), &event))
}

/// An empty wire body means "no body" at the event level
fn event_with_body(body: String) -> Event {
    if body.is_empty() {
        Event::new()
    } else {
        Event::with_body(body)
    }
}

/// Map an [`ApiResponse`] onto the wire.
///
/// Handler headers are applied as-is; the content type defaults to
/// `application/json` when the handler did not set one.
fn into_http_response(api_response: ApiResponse) -> Response {
    let status = StatusCode::from_u16(api_response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = http::Response::builder().status(status);
    let mut has_content_type = false;

    if let Some(headers) = &api_response.headers {
        for (name, value) in headers {
            if name.eq_ignore_ascii_case("content-type") {
                has_content_type = true;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
    }
    if !has_content_type {
        builder = builder.header("content-type", "application/json");
    }

    builder
        .body(Body::from(api_response.body))
        .unwrap_or_else(|_| {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
}
