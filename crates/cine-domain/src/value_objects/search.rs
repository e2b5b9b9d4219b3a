//! Search-Related Value Objects
//!
//! Value objects describing a kNN request against the vector store and the
//! raw documents it returns.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value Object: Approximate kNN Search Request
///
/// ## Business Rules
///
/// - `k` must be at least 1
/// - `num_candidates` must be at least `k`
/// - The query vector must not be empty
///
/// ## Example
///
/// ```rust
/// use cine_domain::value_objects::KnnQuery;
///
/// let query = KnnQuery::new("tmdb-with-embeddings", "Embedding_Overview.predicted_value", vec![0.1; 384], 10, 100);
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnnQuery {
    /// Index to search
    pub index: String,
    /// Dense vector field compared against the query vector
    pub field: String,
    /// Query vector
    pub vector: Vec<f32>,
    /// Number of results to return
    pub k: usize,
    /// Candidate pool size considered before final ranking
    pub num_candidates: usize,
}

impl KnnQuery {
    /// Create a new kNN query
    pub fn new<I: Into<String>, F: Into<String>>(
        index: I,
        field: F,
        vector: Vec<f32>,
        k: usize,
        num_candidates: usize,
    ) -> Self {
        Self {
            index: index.into(),
            field: field.into(),
            vector,
            k,
            num_candidates,
        }
    }

    /// Check the query parameters before sending them to a store
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::invalid_argument("k must be at least 1"));
        }
        if self.num_candidates < self.k {
            return Err(Error::invalid_argument(format!(
                "num_candidates ({}) must be >= k ({})",
                self.num_candidates, self.k
            )));
        }
        if self.vector.is_empty() {
            return Err(Error::invalid_argument("query vector cannot be empty"));
        }
        Ok(())
    }
}

/// Value Object: Raw Vector Store Hit
///
/// A document as returned by the store, before any field translation.
/// `source` holds whatever fields the document carries; nothing about their
/// presence or type is guaranteed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawHit {
    /// Document identifier in the store
    pub id: Option<String>,
    /// Similarity score reported by the store (higher is more similar)
    pub score: Option<f64>,
    /// Stored document fields
    pub source: Map<String, Value>,
}

impl RawHit {
    /// Create a hit from a score and a JSON source document
    ///
    /// Non-object sources are treated as an empty document.
    pub fn new(id: Option<String>, score: Option<f64>, source: Value) -> Self {
        let source = match source {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { id, score, source }
    }

    /// Look up a source field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.source.get(name)
    }
}
