//! HTTP API Round-Trip Tests
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`,
//! checking that the hosting layer carries handler responses onto the wire
//! unchanged.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bookshelf::http_server::HttpServer;
use bookshelf::store::MemoryStore;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn test_router() -> Router {
    HttpServer::new(Arc::new(MemoryStore::new())).router()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_books(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/books")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// Routes
// =============================================================================

#[tokio::test]
async fn test_health() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_add_then_get_roundtrip() {
    let router = test_router();

    let book = json!({
        "book_id": "b1",
        "title": "Dune",
        "author": "Frank Herbert",
        "cover_image": "https://covers/dune.jpg"
    });

    let response = router.clone().oneshot(post_books(book.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(response_json(response).await, json!("Book added successfully!"));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/books/b1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, book);
}

#[tokio::test]
async fn test_add_book_validation_maps_to_400() {
    let response = test_router()
        .oneshot(post_books(json!({"title": "T"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_add_book_empty_body_maps_to_400() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/books")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_book_maps_to_404() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/books/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Book not found");
}

#[tokio::test]
async fn test_put_books_is_lenient_create() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/books")
                .body(Body::from(json!({"title": "T", "author": "A"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The generated record shows up in the listing
    let response = router
        .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let listed = response_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_books_empty() {
    let response = test_router()
        .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));
}
