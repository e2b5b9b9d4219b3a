//! Domain Value Objects
//!
//! Immutable value objects that flow through a single search request.
//! None of them carry identity or outlive the request that produced them.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Dense vector representation of the query text |
//! | [`InferenceOutcome`] | Tagged result of an embedding call (empty or embedded) |
//! | [`KnnQuery`] | Parameters of an approximate nearest-neighbour search |
//! | [`RawHit`] | Unprocessed document returned by the vector store |
//! | [`Movie`] | Canonical movie record returned to callers |

/// Semantic embedding value objects
pub mod embedding;
/// Movie result record
pub mod movie;
/// Search-related value objects
pub mod search;

pub use embedding::{Embedding, InferenceOutcome};
pub use movie::Movie;
pub use search::{KnnQuery, RawHit};
