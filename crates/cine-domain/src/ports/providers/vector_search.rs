use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{KnnQuery, RawHit};

/// Vector Similarity Search Interface
///
/// Issues an approximate kNN query against a vector-indexed document store.
///
/// # Guarantees
///
/// - At most `query.k` hits are returned
/// - Hits are ordered by descending similarity as reported by the store
/// - Neighbours are approximate; tie-break order for equal scores is store-defined
///
/// # Failures
///
/// Connection or authentication failures, a missing index and a vector
/// dimensionality mismatch are all returned as errors. Nothing is retried.
///
/// # Example
///
/// ```ignore
/// use cine_domain::ports::providers::VectorSearchProvider;
///
/// let query = KnnQuery::new("tmdb-with-embeddings", "Embedding_Overview.predicted_value", vector, 10, 100);
/// for hit in provider.knn_search(&query).await? {
///     println!("{:?} scored {:?}", hit.id, hit.score);
/// }
/// ```
#[async_trait]
pub trait VectorSearchProvider: Send + Sync {
    /// Run an approximate kNN search and return the ranked raw hits
    async fn knn_search(&self, query: &KnnQuery) -> Result<Vec<RawHit>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider
    ///
    /// Returns `Ok(())` when the store is reachable and accepting requests.
    async fn health_check(&self) -> Result<()>;
}
