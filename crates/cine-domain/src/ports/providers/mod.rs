//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Query text to dense vector |
//! | VectorSearchProvider | Approximate kNN search over indexed documents |

/// Embedding provider port
pub mod embedding;
/// Vector search provider port
pub mod vector_search;

pub use embedding::EmbeddingProvider;
pub use vector_search::VectorSearchProvider;
