//! Configuration
//!
//! | Section | Type | Purpose |
//! |---------|------|---------|
//! | `server` | [`ServerConfig`] | Bind address, port and CORS |
//! | `backend` | [`BackendConfig`] | Search backend kind, URL and credentials |
//! | `search` | [`SearchConfig`] | Index, vector field, model and kNN parameters |
//! | `logging` | [`LoggingConfig`] | Level, format and optional log file |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, BackendConfig, BackendProvider, LoggingConfig, SearchConfig, ServerConfig,
};
