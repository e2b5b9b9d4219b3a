//! # Cine Search - Provider Implementations
//!
//! Adapters implementing the ports defined in `cine-domain` against an
//! Elasticsearch cluster, plus offline null providers.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Elasticsearch trained model inference, Null |
//! | Vector Search | `VectorSearchProvider` | Elasticsearch kNN search, Null |
//!
//! Both Elasticsearch adapters share one [`http::ElasticsearchConnection`],
//! which owns the pooled HTTP client, the base URL and the credentials.
//!
//! ## Usage
//!
//! ```ignore
//! use cine_providers::embedding::ElasticsearchEmbeddingProvider;
//! use cine_providers::http::{ElasticsearchConnection, ElasticsearchConnectionConfig};
//! use cine_providers::vector_search::ElasticsearchVectorSearchProvider;
//! ```

// Re-export cine-domain types commonly used with providers
pub use cine_domain::error::{Error, Result};
pub use cine_domain::ports::providers::{EmbeddingProvider, VectorSearchProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client abstractions and the Elasticsearch connection
pub mod http;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` trait for inference backends.
pub mod embedding;

/// Vector search provider implementations
///
/// Implements `VectorSearchProvider` trait for kNN search backends.
pub mod vector_search;

pub use embedding::{ElasticsearchEmbeddingProvider, NullEmbeddingProvider};
pub use http::{ElasticsearchConnection, ElasticsearchConnectionConfig, HttpClientProvider};
pub use vector_search::{ElasticsearchVectorSearchProvider, NullVectorSearchProvider};
