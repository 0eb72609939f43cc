//! CLI command implementations
//!
//! `serve` boot sequence:
//! 1. Load and validate configuration
//! 2. Apply the log threshold
//! 3. Build the store (seeded or empty)
//! 4. Start the tokio runtime and the HTTP server

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::store::{FoodRepository, InMemoryFoodStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Load configuration from `path`, or defaults when no path is given.
/// `port` overrides whatever the file says.
pub fn load_config(path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
        }
        None => HttpServerConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Build the store the server will own for its whole lifetime
pub fn build_store(config: &HttpServerConfig) -> CliResult<Arc<dyn FoodRepository>> {
    if !config.seed {
        return Ok(Arc::new(InMemoryFoodStore::new()));
    }

    let store = InMemoryFoodStore::seeded()
        .map_err(|e| CliError::boot_failed(format!("Failed to seed store: {}", e)))?;
    let count = store
        .len()
        .map_err(|e| CliError::boot_failed(e.to_string()))?
        .to_string();
    log_event_with_fields(Event::StoreSeeded, &[("count", count.as_str())]);
    Ok(Arc::new(store))
}

/// Start the HTTP server and block until it shuts down
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = load_config(config_path, port)?;
    let severity = config.log_severity().map_err(CliError::config_error)?;
    Logger::set_threshold(severity);

    let addr = config.socket_addr();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("addr", addr.as_str()), ("log_level", config.log_level.as_str())],
    );

    let store = build_store(&config)?;
    let server = HttpServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
