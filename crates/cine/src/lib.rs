//! # Cine Search
//!
//! Semantic movie search: a free-text query is embedded by a model deployed
//! in Elasticsearch, matched against plot-overview embeddings with an
//! approximate kNN query, and returned as a ranked list of movies.
//!
//! ## Example
//!
//! ```ignore
//! use cine::infrastructure::{AppConfig, init_app};
//!
//! let context = init_app(AppConfig::default()).await?;
//! for movie in context.search_service().search("a hacker discovers reality is simulated").await? {
//!     println!("{} ({})", movie.title, movie.release_date);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Movie records, kNN value objects, provider ports and errors
//! - `application` - Search use case and result mapping
//! - `providers` - Elasticsearch and offline provider implementations
//! - `infrastructure` - Config, logging, health and bootstrap
//! - `server` - HTTP API

/// Domain layer - core business logic and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cine_domain::*;
}

/// Application layer - search use case
pub mod application {
    pub use cine_application::*;
}

/// Provider implementations
pub mod providers {
    pub use cine_providers::*;
}

/// Infrastructure layer - config, logging, health and bootstrap
pub mod infrastructure {
    pub use cine_infrastructure::*;
}

/// Server layer - HTTP routes and transport
pub mod server {
    pub use cine_server::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Movie, Result};

// Re-export main entry points at the crate root
pub use server::{run_search, run_server};

// Re-export server types for convenience
pub use server::{CineServer, CineServerBuilder};
