//! HTTP server
//!
//! Hosts the four book handlers plus the health check behind a single axum
//! router.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::store::BookStore;

use super::config::HttpServerConfig;
use super::routes::{book_routes, health_routes, AppState};

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server with default configuration
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a new server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn BookStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, store: Arc<dyn BookStore>) -> Router {
        let state = Arc::new(AppState { store });

        // Permissive CORS when no origins are configured
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(book_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address: {}", e),
            )
        })?;

        Logger::info("HTTP_SERVER_LISTENING", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
