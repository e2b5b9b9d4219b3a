//! Transport layer
//!
//! The search API is served over HTTP only.

pub mod http;
