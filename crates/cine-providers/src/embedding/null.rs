//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings.
//! No external dependencies - always works offline.

use async_trait::async_trait;

use cine_domain::constants::DEFAULT_EMBEDDING_DIMENSIONS;
use cine_domain::error::Result;
use cine_domain::ports::providers::EmbeddingProvider;
use cine_domain::value_objects::{Embedding, InferenceOutcome};

use crate::constants::PROVIDER_NULL;

/// Null embedding provider
///
/// Returns vectors filled with deterministic values derived from the input
/// text. Blank text yields no inference result, like a real model given
/// nothing to embed.
///
/// # Example
///
/// ```rust
/// use cine_providers::embedding::NullEmbeddingProvider;
/// use cine_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a null provider producing 384-dimensional vectors
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_EMBEDDING_DIMENSIONS)
    }

    /// Create a null provider with a custom vector length
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn infer(&self, text: &str) -> Result<InferenceOutcome> {
        if text.trim().is_empty() {
            return Ok(InferenceOutcome::Empty);
        }

        let hash = text.chars().map(|c| c as u32).fold(0u32, u32::wrapping_add);
        #[allow(clippy::cast_precision_loss)]
        let base_value = (hash % 1000) as f32 / 1000.0;
        #[allow(clippy::cast_precision_loss)]
        let vector = (0..self.dimensions)
            .map(|j| (base_value + j as f32 * 0.001) % 1.0)
            .collect();

        Ok(InferenceOutcome::Embedded(Embedding::new(vector, PROVIDER_NULL)))
    }

    fn model_id(&self) -> &str {
        PROVIDER_NULL
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NULL
    }
}
