//! Search Service Use Case
//!
//! Application service for semantic movie search.
//! Runs a single pass of `embedding -> searching -> mapping` with no retries.

use crate::domain_services::result_mapper::map_hits;
use crate::ports::services::SearchServiceInterface;
use cine_domain::constants::{
    DEFAULT_EMBEDDING_DIMENSIONS, DEFAULT_INDEX, DEFAULT_VECTOR_FIELD, SEARCH_K,
    SEARCH_NUM_CANDIDATES,
};
use cine_domain::error::{Error, Result};
use cine_domain::ports::providers::{EmbeddingProvider, VectorSearchProvider};
use cine_domain::{Embedding, InferenceOutcome, KnnQuery, Movie, RawHit};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Parameters of the kNN search issued for every query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// Index holding the movie documents
    pub index: String,
    /// Dense vector field holding the overview embeddings
    pub vector_field: String,
    /// Number of movies returned
    pub k: usize,
    /// Candidate pool size for the approximate search
    pub num_candidates: usize,
    /// Dimensionality the index was built with; `None` skips the check
    pub expected_dimensions: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX.to_string(),
            vector_field: DEFAULT_VECTOR_FIELD.to_string(),
            k: SEARCH_K,
            num_candidates: SEARCH_NUM_CANDIDATES,
            expected_dimensions: Some(DEFAULT_EMBEDDING_DIMENSIONS),
        }
    }
}

impl SearchSettings {
    fn knn_query(&self, vector: Vec<f32>) -> KnnQuery {
        KnnQuery::new(
            self.index.clone(),
            self.vector_field.clone(),
            vector,
            self.k,
            self.num_candidates,
        )
    }
}

/// Search service implementation - embeds the query, then searches the movie index
pub struct SearchServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_search_provider: Arc<dyn VectorSearchProvider>,
    settings: SearchSettings,
}

impl SearchServiceImpl {
    /// Create new search service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_search_provider: Arc<dyn VectorSearchProvider>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            embedding_provider,
            vector_search_provider,
            settings,
        }
    }

    /// Settings used for every search
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    async fn embed(&self, query: &str) -> Result<InferenceOutcome> {
        debug!(
            phase = "embedding",
            provider = self.embedding_provider.provider_name(),
            model = self.embedding_provider.model_id(),
            "Embedding query"
        );
        self.embedding_provider
            .infer(query)
            .await
            .inspect_err(|e| error!(phase = "embedding", error = %e, "Search failed"))
    }

    fn check_dimensions(&self, embedding: &Embedding) -> Result<()> {
        match self.settings.expected_dimensions {
            Some(expected) if expected != embedding.vector.len() => {
                let err = Error::dimension_mismatch(expected, embedding.vector.len());
                error!(phase = "searching", error = %err, "Search failed");
                Err(err)
            }
            _ => Ok(()),
        }
    }

    async fn knn_search(&self, embedding: Embedding) -> Result<Vec<RawHit>> {
        let query = self.settings.knn_query(embedding.vector);
        debug!(
            phase = "searching",
            provider = self.vector_search_provider.provider_name(),
            index = %query.index,
            k = query.k,
            num_candidates = query.num_candidates,
            "Running kNN search"
        );
        let mut hits = self
            .vector_search_provider
            .knn_search(&query)
            .await
            .inspect_err(|e| error!(phase = "searching", error = %e, "Search failed"))?;
        hits.truncate(query.k);
        Ok(hits)
    }
}

#[async_trait::async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        info!(query_len = query.len(), "Semantic search requested");

        let embedding = match self.embed(query).await? {
            InferenceOutcome::Embedded(embedding) => embedding,
            InferenceOutcome::Empty => {
                info!("No inference results for query, returning empty result");
                return Ok(Vec::new());
            }
        };

        self.check_dimensions(&embedding)?;
        let hits = self.knn_search(embedding).await?;

        debug!(phase = "mapping", hits = hits.len(), "Mapping hits to movies");
        let movies = map_hits(&hits);

        info!(results = movies.len(), "Semantic search completed");
        Ok(movies)
    }
}
