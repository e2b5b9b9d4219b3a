//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services.

use async_trait::async_trait;
use cine_domain::Movie;
use cine_domain::error::Result;

// ============================================================================
// Search Service Interface
// ============================================================================

/// Semantic Movie Search Interface
///
/// One call is one independent search: at most one embedding call followed by
/// at most one vector search call. Implementations never retry and never
/// return a partial list.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Search for movies whose overview is semantically close to the query
    ///
    /// Returns the ranked list (possibly empty) or the failure that stopped
    /// the search.
    async fn search(&self, query: &str) -> Result<Vec<Movie>>;
}
