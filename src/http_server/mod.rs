//! HTTP hosting layer
//!
//! Adapts HTTP requests into handler events and hosts the result behind an
//! axum router.
//!
//! # Endpoints
//!
//! - `POST /books` - strict create
//! - `PUT /books` - lenient create
//! - `GET /books` - list
//! - `GET /books/{book_id}` - point lookup
//! - `GET /health` - health check

pub mod config;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use routes::AppState;
pub use server::HttpServer;
