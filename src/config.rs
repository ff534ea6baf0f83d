//! Service configuration
//!
//! Loaded from a JSON file; every optional field carries a serde default,
//! so a minimal config is just `{"data_dir": "./data"}`.

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

/// Which backend holds the book collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Append-only file store under `data_dir`
    File,
    /// Ephemeral in-memory store
    Memory,
}

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Data directory (required)
    pub data_dir: String,

    /// Store backend (optional, default "file")
    #[serde(default = "default_store_kind")]
    pub store: StoreKind,

    /// HTTP server settings (optional)
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_store_kind() -> StoreKind {
    StoreKind::File
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            store: StoreKind::File,
            http: HttpServerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: ServiceConfig =
            serde_json::from_str("{\"data_dir\": \"/tmp/books\"}").unwrap();
        assert_eq!(config.data_dir, "/tmp/books");
        assert_eq!(config.store, StoreKind::File);
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_store_kind_parses_lowercase() {
        let config: ServiceConfig =
            serde_json::from_str("{\"data_dir\": \"d\", \"store\": \"memory\"}").unwrap();
        assert_eq!(config.store, StoreKind::Memory);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ServiceConfig::default();
        let rendered = serde_json::to_string(&config).unwrap();
        let parsed: ServiceConfig = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.data_dir, config.data_dir);
        assert_eq!(parsed.store, config.store);
    }
}
