//! Server Builder
//!
//! Builder pattern for constructing the search server with dependency injection.
//! Ensures all required dependencies are provided before server construction.

use crate::CineServer;
use cine_application::ports::SearchServiceInterface;
use cine_infrastructure::di::AppContext;
use cine_infrastructure::health::BackendHealthChecker;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`CineServer`]
///
/// The search timeout is optional; both services are required.
#[derive(Default)]
pub struct CineServerBuilder {
    search_service: Option<Arc<dyn SearchServiceInterface>>,
    health: Option<Arc<BackendHealthChecker>>,
    search_timeout: Option<Duration>,
}

impl CineServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from a bootstrapped application context
    ///
    /// Takes both services and the configured search timeout
    /// (`search.timeout_ms`, 0 disables it).
    pub fn from_context(context: &AppContext) -> Self {
        let timeout_ms = context.config.search.timeout_ms;
        Self::new()
            .with_search_service(context.search_service())
            .with_health_checker(context.health())
            .with_search_timeout((timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)))
    }

    /// Set the search service
    pub fn with_search_service(mut self, service: Arc<dyn SearchServiceInterface>) -> Self {
        self.search_service = Some(service);
        self
    }

    /// Set the backend health checker
    pub fn with_health_checker(mut self, health: Arc<BackendHealthChecker>) -> Self {
        self.health = Some(health);
        self
    }

    /// Bound each search; `None` waits for the backend indefinitely
    pub fn with_search_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Build the server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if any required service is not provided
    pub fn build(self) -> Result<CineServer, BuilderError> {
        let search_service = self
            .search_service
            .ok_or(BuilderError::MissingDependency("search service"))?;
        let health = self
            .health
            .ok_or(BuilderError::MissingDependency("health checker"))?;

        Ok(CineServer::new(search_service, health, self.search_timeout))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
