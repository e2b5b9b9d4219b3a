//! Elasticsearch kNN Vector Search Provider
//!
//! Implements the `VectorSearchProvider` port with the approximate kNN
//! option of the Elasticsearch `_search` API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};
use tracing::debug;

use cine_domain::constants::MOVIE_SOURCE_FIELDS;
use cine_domain::error::{Error, Result};
use cine_domain::ports::providers::VectorSearchProvider;
use cine_domain::value_objects::{KnnQuery, RawHit};

use crate::constants::{
    ELASTICSEARCH_HEALTH_PATH, ELASTICSEARCH_HEALTH_RED, PROVIDER_ELASTICSEARCH, search_path,
};
use crate::http::HttpClientProvider;
use crate::utils::{BackendCall, HttpResponseUtils};

/// Elasticsearch vector search provider
///
/// Issues one kNN search per query. Only the movie fields are requested
/// from `_source`, keeping the stored embeddings out of the response.
pub struct ElasticsearchVectorSearchProvider {
    connection: Arc<dyn HttpClientProvider>,
}

impl ElasticsearchVectorSearchProvider {
    /// Create a new provider over a shared cluster connection
    pub fn new(connection: Arc<dyn HttpClientProvider>) -> Self {
        Self { connection }
    }

    /// Build the `_search` request body for a kNN query
    pub fn build_search_body(query: &KnnQuery) -> Value {
        json!({
            "knn": {
                "field": query.field,
                "query_vector": query.vector,
                "k": query.k,
                "num_candidates": query.num_candidates,
            },
            "size": query.k,
            "_source": MOVIE_SOURCE_FIELDS,
        })
    }

    /// Extract ranked hits from a `_search` response
    fn parse_hits(response_data: &Value, call: BackendCall<'_>) -> Result<Vec<RawHit>> {
        let hits = response_data["hits"]["hits"].as_array().ok_or_else(|| {
            Error::search(format!(
                "{call} failed: invalid response format: missing hits.hits array"
            ))
        })?;

        Ok(hits
            .iter()
            .map(|hit| {
                RawHit::new(
                    hit["_id"].as_str().map(str::to_string),
                    hit["_score"].as_f64(),
                    hit["_source"].clone(),
                )
            })
            .collect())
    }
}

#[async_trait]
impl VectorSearchProvider for ElasticsearchVectorSearchProvider {
    async fn knn_search(&self, query: &KnnQuery) -> Result<Vec<RawHit>> {
        query.validate()?;
        let call = BackendCall::Search {
            index: &query.index,
        };

        let response = self
            .connection
            .request(Method::POST, &search_path(&query.index))
            .json(&Self::build_search_body(query))
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::transport_error(call, &e, self.connection.config().timeout)
            })?;

        let response_data = HttpResponseUtils::check_and_parse(response, call).await?;
        let mut hits = Self::parse_hits(&response_data, call)?;
        hits.truncate(query.k);

        debug!(index = %query.index, hits = hits.len(), "kNN search returned");
        Ok(hits)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_ELASTICSEARCH
    }

    async fn health_check(&self) -> Result<()> {
        let call = BackendCall::Health;
        let response = self
            .connection
            .request(Method::GET, ELASTICSEARCH_HEALTH_PATH)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::transport_error(call, &e, self.connection.config().timeout)
            })?;

        let health = HttpResponseUtils::check_and_parse(response, call).await?;
        match health["status"].as_str() {
            Some(ELASTICSEARCH_HEALTH_RED) => Err(Error::network(format!(
                "cluster '{}' reports status red",
                health["cluster_name"].as_str().unwrap_or("unknown")
            ))),
            _ => Ok(()),
        }
    }
}
