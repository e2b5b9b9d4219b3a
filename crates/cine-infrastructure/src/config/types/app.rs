//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{BackendConfig, LoggingConfig, SearchConfig, ServerConfig};

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Search backend connection
    pub backend: BackendConfig,
    /// Semantic search parameters
    pub search: SearchConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
