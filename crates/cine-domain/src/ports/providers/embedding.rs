use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::InferenceOutcome;

/// Query Embedding Interface
///
/// Turns query text into a dense vector using a single configured model.
/// Implementations make exactly one backend call per invocation and never
/// retry or cache.
///
/// # Outcomes
///
/// - `Ok(InferenceOutcome::Embedded(..))`: the model produced a vector
/// - `Ok(InferenceOutcome::Empty)`: the model produced zero inference results
/// - `Err(Error::Embedding { .. })`: the backend was unreachable or failed
///
/// # Example
///
/// ```ignore
/// use cine_domain::ports::providers::EmbeddingProvider;
///
/// match provider.infer("a hacker discovers reality is simulated").await? {
///     InferenceOutcome::Embedded(embedding) => println!("{} dims", embedding.dimensions),
///     InferenceOutcome::Empty => println!("nothing to search for"),
/// }
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Run inference on the query text and take the first result's vector
    async fn infer(&self, text: &str) -> Result<InferenceOutcome>;

    /// Identifier of the model this provider sends text to
    fn model_id(&self) -> &str;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "elasticsearch", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.infer("health check").await?;
        Ok(())
    }
}
