//! Null vector search provider for testing and development

use async_trait::async_trait;

use cine_domain::error::Result;
use cine_domain::ports::providers::VectorSearchProvider;
use cine_domain::value_objects::{KnnQuery, RawHit};

use crate::constants::PROVIDER_NULL;

/// Vector search provider with an empty index
///
/// Validates the query like a real store, then returns no hits.
#[derive(Debug, Clone, Default)]
pub struct NullVectorSearchProvider;

impl NullVectorSearchProvider {
    /// Create a new null vector search provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VectorSearchProvider for NullVectorSearchProvider {
    async fn knn_search(&self, query: &KnnQuery) -> Result<Vec<RawHit>> {
        query.validate()?;
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NULL
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
