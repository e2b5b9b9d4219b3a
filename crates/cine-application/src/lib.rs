//! Application Layer - Cine Search
//!
//! Orchestrates a semantic movie search: embed the query, run a kNN search
//! over the movie index, translate the raw hits into `Movie` records.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the search use case (`SearchServiceImpl`)
//! - Defines the service port consumed by the HTTP and CLI surfaces
//! - Holds the pure result mapper from store documents to movies
//! - Has no dependencies on infrastructure or external frameworks
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cine-domain`: value objects, errors and provider ports
//! - Pure Rust libraries for async, serialization and logging

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
