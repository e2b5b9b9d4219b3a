//! Application Bootstrap
//!
//! ```text
//! AppConfig → ElasticsearchConnection (once) → Providers → SearchServiceImpl
//!                                                  ↓
//!                                        BackendHealthChecker
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default()).await?;
//! let movies = context.search_service().search("a hacker learns the truth").await?;
//! ```

use crate::config::{AppConfig, BackendProvider};
use crate::health::BackendHealthChecker;
use cine_application::ports::SearchServiceInterface;
use cine_application::use_cases::SearchServiceImpl;
use cine_domain::error::Result;
use cine_domain::ports::providers::{EmbeddingProvider, VectorSearchProvider};
use cine_providers::http::{ElasticsearchConnection, HttpClientProvider};
use cine_providers::{
    ElasticsearchEmbeddingProvider, ElasticsearchVectorSearchProvider, NullEmbeddingProvider,
    NullVectorSearchProvider,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Application context holding the wired services
///
/// The backend connection is created once here and shared by both providers
/// for the lifetime of the process.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_search_provider: Arc<dyn VectorSearchProvider>,
    search_service: Arc<dyn SearchServiceInterface>,
    health: Arc<BackendHealthChecker>,
}

impl AppContext {
    /// Get the embedding provider
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedding_provider)
    }

    /// Get the vector search provider
    pub fn vector_search_provider(&self) -> Arc<dyn VectorSearchProvider> {
        Arc::clone(&self.vector_search_provider)
    }

    /// Get the search use case
    pub fn search_service(&self) -> Arc<dyn SearchServiceInterface> {
        Arc::clone(&self.search_service)
    }

    /// Get the backend health checker
    pub fn health(&self) -> Arc<BackendHealthChecker> {
        Arc::clone(&self.health)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("embedding", &self.embedding_provider.provider_name())
            .field("vector_search", &self.vector_search_provider.provider_name())
            .field("model_id", &self.embedding_provider.model_id())
            .finish_non_exhaustive()
    }
}

/// Build providers for the configured backend
fn create_providers(
    config: &AppConfig,
) -> Result<(Arc<dyn EmbeddingProvider>, Arc<dyn VectorSearchProvider>)> {
    match config.backend.provider {
        BackendProvider::Elasticsearch => {
            let connection: Arc<dyn HttpClientProvider> = Arc::new(ElasticsearchConnection::new(
                config.backend.connection_config(),
            )?);
            info!(url = %connection.base_url(), "Connected search backend");

            let embedding = ElasticsearchEmbeddingProvider::new(
                Arc::clone(&connection),
                config.search.model_id.clone(),
            );
            let vector_search = ElasticsearchVectorSearchProvider::new(connection);
            Ok((Arc::new(embedding), Arc::new(vector_search)))
        }
        BackendProvider::Null => {
            warn!("Using null backend: searches return no movies");
            let embedding = match config.search.dimensions {
                0 => NullEmbeddingProvider::new(),
                dimensions => NullEmbeddingProvider::with_dimensions(dimensions),
            };
            Ok((Arc::new(embedding), Arc::new(NullVectorSearchProvider::new())))
        }
    }
}

/// Initialize the application context from configuration
///
/// Creates:
/// - The backend connection (Elasticsearch) or offline null providers
/// - The embedding and vector search providers
/// - The search use case with the configured kNN settings
/// - The backend health checker
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!(backend = %config.backend.provider, "Initializing application context");

    let config = Arc::new(config);
    let (embedding_provider, vector_search_provider) = create_providers(&config)?;

    let search_service: Arc<dyn SearchServiceInterface> = Arc::new(SearchServiceImpl::new(
        Arc::clone(&embedding_provider),
        Arc::clone(&vector_search_provider),
        config.search.settings(),
    ));
    let health = Arc::new(BackendHealthChecker::new(
        Arc::clone(&embedding_provider),
        Arc::clone(&vector_search_provider),
    ));

    info!(
        embedding = embedding_provider.provider_name(),
        model_id = embedding_provider.model_id(),
        vector_search = vector_search_provider.provider_name(),
        index = %config.search.index,
        "Application context ready"
    );

    Ok(AppContext {
        config,
        embedding_provider,
        vector_search_provider,
        search_service,
        health,
    })
}
