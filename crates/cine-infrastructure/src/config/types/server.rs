//! Server configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Add permissive CORS headers so a browser UI can call the API
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            enable_cors: true,
        }
    }
}
