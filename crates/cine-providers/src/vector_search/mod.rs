//! Vector search provider implementations
//!
//! | Provider | Backend |
//! |----------|---------|
//! | [`ElasticsearchVectorSearchProvider`] | Elasticsearch approximate kNN `_search` |
//! | [`NullVectorSearchProvider`] | Always returns no hits |

pub mod elasticsearch;
pub mod null;

pub use elasticsearch::ElasticsearchVectorSearchProvider;
pub use null::NullVectorSearchProvider;
