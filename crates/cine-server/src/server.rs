//! Assembled search server
//!
//! Holds the services the HTTP routes dispatch to. Built with
//! [`CineServerBuilder`](crate::builder::CineServerBuilder).

use cine_application::ports::SearchServiceInterface;
use cine_infrastructure::health::BackendHealthChecker;
use std::sync::Arc;
use std::time::Duration;

use crate::handlers::ServerState;

/// Services behind the search API
#[derive(Clone)]
pub struct CineServer {
    search_service: Arc<dyn SearchServiceInterface>,
    health: Arc<BackendHealthChecker>,
    search_timeout: Option<Duration>,
}

impl CineServer {
    /// Create a server from its services
    pub fn new(
        search_service: Arc<dyn SearchServiceInterface>,
        health: Arc<BackendHealthChecker>,
        search_timeout: Option<Duration>,
    ) -> Self {
        Self {
            search_service,
            health,
            search_timeout,
        }
    }

    /// Search use case
    pub fn search_service(&self) -> Arc<dyn SearchServiceInterface> {
        Arc::clone(&self.search_service)
    }

    /// Backend health checker
    pub fn health(&self) -> Arc<BackendHealthChecker> {
        Arc::clone(&self.health)
    }

    /// Bound on one whole search, if any
    pub fn search_timeout(&self) -> Option<Duration> {
        self.search_timeout
    }

    /// Route state managed by Rocket
    pub fn state(&self) -> ServerState {
        ServerState {
            search_service: self.search_service(),
            health: self.health(),
            search_timeout: self.search_timeout,
        }
    }
}

impl std::fmt::Debug for CineServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CineServer")
            .field("search_timeout", &self.search_timeout)
            .finish_non_exhaustive()
    }
}
