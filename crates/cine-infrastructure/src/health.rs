//! Backend health reporting
//!
//! Checks the search backend and summarises the result for the `/health`
//! endpoint.

use crate::logging::log_health_check;
use cine_domain::ports::providers::{EmbeddingProvider, VectorSearchProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Backend reachable and accepting requests
    Healthy,
    /// Backend unreachable or reporting a failure
    Unhealthy,
}

impl HealthStatus {
    /// Check if the status indicates the service is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Health report returned by `/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall status
    pub status: HealthStatus,
    /// Embedding provider name
    pub embedding_provider: String,
    /// Embedding model identifier
    pub model_id: String,
    /// Vector search provider name
    pub vector_search_provider: String,
    /// Time spent probing the backend in milliseconds
    pub response_time_ms: u64,
    /// Failure message when unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Checks the configured backend
///
/// Uses the vector search provider's health check (cluster health for
/// Elasticsearch). No inference is run.
#[derive(Clone)]
pub struct BackendHealthChecker {
    embedding: Arc<dyn EmbeddingProvider>,
    vector_search: Arc<dyn VectorSearchProvider>,
}

impl BackendHealthChecker {
    /// Create a checker over the running providers
    pub fn new(
        embedding: Arc<dyn EmbeddingProvider>,
        vector_search: Arc<dyn VectorSearchProvider>,
    ) -> Self {
        Self {
            embedding,
            vector_search,
        }
    }

    /// Check the backend once
    pub async fn check(&self) -> HealthReport {
        let started = Instant::now();
        let result = self.vector_search.health_check().await;
        let response_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let error = result.err().map(|e| e.to_string());
        log_health_check(
            self.vector_search.provider_name(),
            error.is_none(),
            error.as_deref(),
        );

        HealthReport {
            status: if error.is_none() {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy
            },
            embedding_provider: self.embedding.provider_name().to_string(),
            model_id: self.embedding.model_id().to_string(),
            vector_search_provider: self.vector_search.provider_name().to_string(),
            response_time_ms,
            error,
        }
    }
}
