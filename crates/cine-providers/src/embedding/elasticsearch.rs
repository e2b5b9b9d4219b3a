//! Elasticsearch Embedding Provider
//!
//! Implements the `EmbeddingProvider` port by running a deployed trained
//! model (e.g. `sentence-transformers__msmarco-minilm-l-12-v3`) through the
//! Elasticsearch machine learning inference API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};

use cine_domain::error::{Error, Result};
use cine_domain::ports::providers::EmbeddingProvider;
use cine_domain::value_objects::{Embedding, InferenceOutcome};

use crate::constants::{INFERENCE_TEXT_FIELD, PROVIDER_ELASTICSEARCH, inference_path};
use crate::http::HttpClientProvider;
use crate::utils::{BackendCall, HttpResponseUtils};

/// Elasticsearch embedding provider
///
/// Sends one `_infer` request per query and takes the first inference
/// result's `predicted_value`. Receives the shared connection via
/// constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use cine_providers::embedding::ElasticsearchEmbeddingProvider;
/// use cine_providers::http::{ElasticsearchConnection, ElasticsearchConnectionConfig};
///
/// fn example() -> cine_domain::Result<()> {
///     let connection = Arc::new(ElasticsearchConnection::new(ElasticsearchConnectionConfig::default())?);
///     let provider = ElasticsearchEmbeddingProvider::new(
///         connection,
///         "sentence-transformers__msmarco-minilm-l-12-v3",
///     );
///     Ok(())
/// }
/// ```
pub struct ElasticsearchEmbeddingProvider {
    connection: Arc<dyn HttpClientProvider>,
    model_id: String,
}

impl ElasticsearchEmbeddingProvider {
    /// Create a new Elasticsearch embedding provider
    ///
    /// # Arguments
    /// * `connection` - Shared cluster connection
    /// * `model_id` - Deployed trained model identifier
    pub fn new<M: Into<String>>(connection: Arc<dyn HttpClientProvider>, model_id: M) -> Self {
        Self {
            connection,
            model_id: model_id.into(),
        }
    }

    fn call(&self) -> BackendCall<'_> {
        BackendCall::Inference {
            model_id: &self.model_id,
        }
    }

    /// Send the inference request and return the response body
    async fn fetch_inference(&self, text: &str) -> Result<Value> {
        let payload = json!({ "docs": [{ INFERENCE_TEXT_FIELD: text }] });

        let response = self
            .connection
            .request(Method::POST, &inference_path(&self.model_id))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::transport_error(
                    self.call(),
                    &e,
                    self.connection.config().timeout,
                )
            })?;

        HttpResponseUtils::check_and_parse(response, self.call()).await
    }

    /// Parse the first inference result out of the response body
    ///
    /// Zero results is a normal outcome; a result without a numeric
    /// `predicted_value` array is a malformed response.
    fn parse_inference(&self, response_data: &Value) -> Result<InferenceOutcome> {
        let Some(first) = response_data["inference_results"]
            .as_array()
            .and_then(|results| results.first())
        else {
            return Ok(InferenceOutcome::Empty);
        };

        let vector = first["predicted_value"]
            .as_array()
            .ok_or_else(|| {
                Error::embedding("Invalid response format: missing predicted_value array")
            })?
            .iter()
            .map(|v| {
                v.as_f64().map(|f| f as f32).ok_or_else(|| {
                    Error::embedding("Invalid response format: non-numeric predicted_value")
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        Ok(InferenceOutcome::Embedded(Embedding::new(
            vector,
            self.model_id.clone(),
        )))
    }
}

#[async_trait]
impl EmbeddingProvider for ElasticsearchEmbeddingProvider {
    async fn infer(&self, text: &str) -> Result<InferenceOutcome> {
        let response_data = self.fetch_inference(text).await?;
        self.parse_inference(&response_data)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn provider_name(&self) -> &str {
        PROVIDER_ELASTICSEARCH
    }
}
