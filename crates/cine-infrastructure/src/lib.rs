//! Infrastructure Layer - Cine Search
//!
//! Cross-cutting technical concerns and the composition root.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, `CINE_` env) |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`error_ext`] | Context helpers converting foreign errors |
//! | [`health`] | Backend health report |
//! | [`di`] | `init_app` bootstrap wiring providers into the search service |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod health;
pub mod logging;

pub use config::AppConfig;
pub use di::{AppContext, init_app};
