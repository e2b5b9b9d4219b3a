//! Composition root
//!
//! Builds the backend connection, the providers and the search service from
//! an [`AppConfig`](crate::config::AppConfig).

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
