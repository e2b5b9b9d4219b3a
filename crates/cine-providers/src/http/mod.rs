//! HTTP client abstractions
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HttpClientProvider`] | Port the Elasticsearch adapters send requests through |
//! | [`HttpClientConfig`] | Pooling and timeout settings |
//! | [`ElasticsearchConnection`] | Authenticated client for one cluster |

pub mod connection;
pub mod provider;

pub use connection::{ElasticsearchConnection, ElasticsearchConnectionConfig};
pub use provider::{HttpClientConfig, HttpClientProvider};
