//! CLI command implementations
//!
//! - init: create the data directory and write a default configuration file
//! - serve: load configuration, open the store, enter the serving loop

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{ServiceConfig, StoreKind};
use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::store::{BookStore, FileStore, MemoryStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Create the data directory and write a default configuration file.
///
/// Fails if the configuration file already exists.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized());
    }

    // Data directory lives next to the configuration file
    let data_dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.join("data"))
        .unwrap_or_else(|| PathBuf::from("./data"));

    let config = ServiceConfig {
        data_dir: data_dir.display().to_string(),
        ..ServiceConfig::default()
    };
    fs::create_dir_all(&config.data_dir)?;

    let rendered = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, rendered)?;

    Logger::info(
        "INIT_COMPLETE",
        &[
            ("config", &config_path.display().to_string()),
            ("data_dir", &config.data_dir),
        ],
    );
    Ok(())
}

/// Load configuration, open the store and serve until interrupted.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config)?;
    let server = HttpServer::with_config(config.http.clone(), store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start async runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
}

/// Read and parse the configuration file
fn load_config(config_path: &Path) -> CliResult<ServiceConfig> {
    let raw = fs::read_to_string(config_path).map_err(|e| {
        CliError::config_error(format!("Failed to read {}: {}", config_path.display(), e))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| CliError::config_error(format!("Invalid configuration: {}", e)))
}

/// Construct the configured store backend
fn open_store(config: &ServiceConfig) -> CliResult<Arc<dyn BookStore>> {
    match config.store {
        StoreKind::File => {
            let store = FileStore::open(Path::new(&config.data_dir))
                .map_err(|e| CliError::boot_failed(format!("Failed to open store: {}", e)))?;
            Ok(Arc::new(store))
        }
        StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
