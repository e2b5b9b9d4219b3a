//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the adapters that talk to the
//! embedding and search backend.
//!
//! ## Architecture
//!
//! Ports define the contracts that external layers must implement.
//! This follows the Dependency Inversion Principle:
//! - High-level modules (domain, application) define interfaces
//! - Low-level modules (providers) implement them

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, VectorSearchProvider};
