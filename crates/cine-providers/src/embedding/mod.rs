//! Embedding provider implementations
//!
//! | Provider | Backend |
//! |----------|---------|
//! | [`ElasticsearchEmbeddingProvider`] | Elasticsearch trained model `_infer` API |
//! | [`NullEmbeddingProvider`] | Deterministic offline vectors |

pub mod elasticsearch;
pub mod null;

pub use elasticsearch::ElasticsearchEmbeddingProvider;
pub use null::NullEmbeddingProvider;
