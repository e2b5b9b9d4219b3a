//! Application Ports
//!
//! Service interfaces implemented by the use cases and consumed by the
//! delivery layers (HTTP server, CLI).

pub mod services;

pub use services::SearchServiceInterface;
