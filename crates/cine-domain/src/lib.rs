//! # Cine Search - Domain Layer
//!
//! Core types and contracts for semantic movie search. This crate has no I/O:
//! it defines what a movie result looks like, how an embedding call can end,
//! and the ports that embedding and vector search adapters implement.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `Embedding`, `InferenceOutcome`, `RawHit`, `Movie`, `KnnQuery` |
//! | [`ports`] | `EmbeddingProvider` and `VectorSearchProvider` traits |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Default index, field, model and store field names |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{Embedding, InferenceOutcome, KnnQuery, Movie, RawHit};
