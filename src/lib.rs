//! bookshelf - a small, self-hostable book catalog service
//!
//! Four independent request handlers over a single key-value collection of
//! book records, hosted behind an HTTP server.

pub mod api;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
