//! HTTP Transport
//!
//! Serves the search API with Rocket.
//!
//! # Example
//!
//! ```text
//! GET /search?q=a%20hacker%20discovers%20reality%20is%20simulated HTTP/1.1
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! [{"ExternalId":603,"Title":"The Matrix",...}]
//! ```

use cine_domain::error::{Error, Result};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket, routes};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::constants::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use crate::handlers::{health_check, search_movies};
use crate::server::CineServer;
use cine_infrastructure::config::ServerConfig;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for HttpTransportConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            enable_cors: config.enable_cors,
        }
    }
}

impl HttpTransportConfig {
    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], self.port)))
    }
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    server: Arc<CineServer>,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, server: Arc<CineServer>) -> Self {
        Self { config, server }
    }

    /// Transport configuration
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let mut rocket = rocket::build()
            .manage(self.server.state())
            .mount("/", routes![search_movies, health_check]);

        if self.config.enable_cors {
            rocket = rocket.attach(Cors);
        }

        rocket
    }

    /// Start the HTTP transport server
    ///
    /// Runs until Rocket receives a shutdown signal (Ctrl+C).
    pub async fn start(self) -> Result<()> {
        let addr = self.config.socket_addr();
        info!("HTTP transport listening on {}", addr);

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| Error::network(format!("HTTP server failed: {e}")))?;

        info!("HTTP transport stopped");
        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            CORS_ALLOW_METHODS,
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            CORS_ALLOW_HEADERS,
        ));
    }
}
