//! Provider-specific constants

// ============================================================================
// HTTP
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default per-request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum idle connections kept per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// Idle connection timeout in seconds
pub const HTTP_IDLE_TIMEOUT_SECS: u64 = 90;

/// TCP keep-alive in seconds
pub const HTTP_KEEPALIVE_SECS: u64 = 60;

// ============================================================================
// Elasticsearch
// ============================================================================

/// Default cluster URL
pub const ELASTICSEARCH_DEFAULT_URL: &str = "https://localhost:9200";

/// Cluster health endpoint
pub const ELASTICSEARCH_HEALTH_PATH: &str = "/_cluster/health";

/// Error type reported for a missing index
pub const ELASTICSEARCH_INDEX_NOT_FOUND: &str = "index_not_found_exception";

/// Cluster health status that counts as unavailable
pub const ELASTICSEARCH_HEALTH_RED: &str = "red";

/// Inference input field expected by sentence-transformers models
pub const INFERENCE_TEXT_FIELD: &str = "text_field";

/// Provider name reported by the Elasticsearch adapters
pub const PROVIDER_ELASTICSEARCH: &str = "elasticsearch";

/// Provider name reported by the null adapters
pub const PROVIDER_NULL: &str = "null";

/// Build the trained model inference path for a model
pub fn inference_path(model_id: &str) -> String {
    format!("/_ml/trained_models/{model_id}/_infer")
}

/// Build the search path for an index
pub fn search_path(index: &str) -> String {
    format!("/{index}/_search")
}
