//! Server Initialization
//!
//! Startup sequence shared by the `serve` and `search` commands:
//!
//! 1. Load configuration (defaults, TOML file, `CINE_` environment)
//! 2. Install the tracing subscriber
//! 3. Bootstrap the backend connection and services (`init_app`)
//! 4. Serve HTTP, or run a single search

use std::path::Path;
use std::sync::Arc;

use cine_domain::Movie;
use cine_domain::error::Result;
use cine_infrastructure::config::{AppConfig, ConfigLoader};
use cine_infrastructure::error_ext::ErrorContext;
use cine_infrastructure::logging::init_logging;
use cine_infrastructure::{AppContext, init_app};
use tracing::info;

use crate::builder::CineServerBuilder;
use crate::transport::http::{HttpTransport, HttpTransportConfig};

/// Run the search API server
///
/// Blocks until the HTTP transport shuts down.
pub async fn run_server(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        backend = %config.backend.provider,
        "Starting Cine search server"
    );

    let transport_config = HttpTransportConfig::from(&config.server);
    let context = init_app(config).await?;
    let server = CineServerBuilder::from_context(&context)
        .build()
        .context("Failed to assemble server")?;
    info!("Search server initialized successfully");

    HttpTransport::new(transport_config, Arc::new(server))
        .start()
        .await
}

/// Run one search and return the ranked movies
///
/// Used by the `cine search` command.
pub async fn run_search(config_path: Option<&Path>, query: &str) -> Result<Vec<Movie>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let context: AppContext = init_app(config).await?;
    context.search_service().search(query).await
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
