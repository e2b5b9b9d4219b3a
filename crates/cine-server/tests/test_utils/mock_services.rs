//! Test doubles for the services behind the HTTP routes

use async_trait::async_trait;
use cine_application::ports::SearchServiceInterface;
use cine_domain::ports::providers::{EmbeddingProvider, VectorSearchProvider};
use cine_domain::{Error, InferenceOutcome, KnnQuery, Movie, RawHit, Result};
use cine_infrastructure::health::BackendHealthChecker;
use cine_server::{CineServer, CineServerBuilder, HttpTransport, HttpTransportConfig};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Search service returning a canned outcome
pub struct MockSearchService {
    movies: Vec<Movie>,
    failure: Option<fn() -> Error>,
    delay: Option<Duration>,
    queries: Mutex<Vec<String>>,
}

impl MockSearchService {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            failure: None,
            delay: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            ..Self::new()
        }
    }

    pub fn failing(failure: fn() -> Error) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchServiceInterface for MockSearchService {
    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        self.queries.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(self.movies.clone()),
        }
    }
}

/// Embedding provider that only reports its identity
pub struct StubEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    async fn infer(&self, _text: &str) -> Result<InferenceOutcome> {
        Ok(InferenceOutcome::Empty)
    }

    fn model_id(&self) -> &str {
        "stub-model"
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Vector search provider with a fixed health outcome
pub struct StubVectorSearchProvider {
    healthy: bool,
}

impl StubVectorSearchProvider {
    pub fn healthy() -> Self {
        Self { healthy: true }
    }

    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl VectorSearchProvider for StubVectorSearchProvider {
    async fn knn_search(&self, _query: &KnnQuery) -> Result<Vec<RawHit>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "stub-store"
    }

    async fn health_check(&self) -> Result<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(Error::network("connection refused"))
        }
    }
}

pub fn health_checker(healthy: bool) -> Arc<BackendHealthChecker> {
    let store = if healthy {
        StubVectorSearchProvider::healthy()
    } else {
        StubVectorSearchProvider::unhealthy()
    };
    Arc::new(BackendHealthChecker::new(
        Arc::new(StubEmbeddingProvider),
        Arc::new(store),
    ))
}

pub fn server_with(
    search: Arc<dyn SearchServiceInterface>,
    timeout: Option<Duration>,
) -> CineServer {
    CineServerBuilder::new()
        .with_search_service(search)
        .with_health_checker(health_checker(true))
        .with_search_timeout(timeout)
        .build()
        .expect("all services provided")
}

pub fn transport(server: CineServer) -> HttpTransport {
    HttpTransport::new(HttpTransportConfig::default(), Arc::new(server))
}

pub fn matrix() -> Movie {
    Movie {
        external_id: 603,
        title: "The Matrix".to_string(),
        release_date: "1999-03-31".to_string(),
        rating_average: 8.2,
        rating_count: 24000,
        release_status: "Released".to_string(),
        overview: "A computer hacker learns about the true nature of reality.".to_string(),
    }
}

pub fn reloaded() -> Movie {
    Movie {
        external_id: 604,
        title: "The Matrix Reloaded".to_string(),
        release_date: "2003-05-15".to_string(),
        rating_average: 7.0,
        rating_count: 11000,
        release_status: "Released".to_string(),
        overview: "Neo and the rebels fight the machines.".to_string(),
    }
}
