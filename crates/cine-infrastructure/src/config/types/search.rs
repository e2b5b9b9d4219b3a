//! Search configuration types

use cine_application::use_cases::SearchSettings;
use cine_domain::constants::{
    DEFAULT_EMBEDDING_DIMENSIONS, DEFAULT_INDEX, DEFAULT_MODEL_ID, DEFAULT_VECTOR_FIELD,
    SEARCH_K, SEARCH_NUM_CANDIDATES,
};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SEARCH_TIMEOUT_MS;

/// Semantic search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Index holding the movie documents
    pub index: String,
    /// Dense vector field compared against the query embedding
    pub vector_field: String,
    /// Deployed trained model used to embed queries
    pub model_id: String,
    /// Number of movies returned
    pub k: usize,
    /// Candidate pool size for approximate kNN
    pub num_candidates: usize,
    /// Expected embedding dimensionality; 0 skips the check
    pub dimensions: usize,
    /// Bound on one whole search in milliseconds; 0 disables it
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX.to_string(),
            vector_field: DEFAULT_VECTOR_FIELD.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            k: SEARCH_K,
            num_candidates: SEARCH_NUM_CANDIDATES,
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
            timeout_ms: DEFAULT_SEARCH_TIMEOUT_MS,
        }
    }
}

impl SearchConfig {
    /// Settings handed to the search use case
    pub fn settings(&self) -> SearchSettings {
        SearchSettings {
            index: self.index.clone(),
            vector_field: self.vector_field.clone(),
            k: self.k,
            num_candidates: self.num_candidates,
            expected_dimensions: (self.dimensions > 0).then_some(self.dimensions),
        }
    }
}
