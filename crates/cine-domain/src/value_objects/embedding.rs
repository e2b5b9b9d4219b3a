//! Semantic Embedding Value Objects
//!
//! Value objects representing the query embedding and the outcome of an
//! inference call against the embedding model.

use serde::{Deserialize, Serialize};

/// Value Object: Query Text Embedding
///
/// Dense vector produced by the embedding model for one query. It is built
/// once per search request and never persisted.
///
/// ## Example
///
/// ```rust
/// use cine_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "msmarco-minilm");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving its dimensionality from the vector
    pub fn new<S: Into<String>>(vector: Vec<f32>, model: S) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }
}

/// Value Object: Result of running inference on a query
///
/// A model may legitimately return no inference results (for example for
/// empty input). That case is kept apart from backend failures, which are
/// reported through [`crate::Error`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutcome {
    /// The model produced zero inference results
    Empty,
    /// The model produced a vector for the query
    Embedded(Embedding),
}

impl InferenceOutcome {
    /// Returns the embedding if one was produced
    pub fn embedding(&self) -> Option<&Embedding> {
        match self {
            Self::Empty => None,
            Self::Embedded(embedding) => Some(embedding),
        }
    }

    /// Whether the model produced no inference results
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<Embedding>> for InferenceOutcome {
    fn from(value: Option<Embedding>) -> Self {
        value.map_or(Self::Empty, Self::Embedded)
    }
}
