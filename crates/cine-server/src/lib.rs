//! # Cine Search Server
//!
//! HTTP layer for semantic movie search. Exposes the search use case as
//! `GET /search?q=` and the backend health check as `GET /health`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! #[rocket::main]
//! async fn main() -> cine_domain::Result<()> {
//!     // Default config lookup (cwd, XDG paths, environment)
//!     cine_server::run_server(None).await
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CineServer`] | Assembled services behind the HTTP routes |
//! | [`CineServerBuilder`] | Builder checking every service is provided |
//! | [`HttpTransport`] | Rocket instance bound to the configured address |

pub mod builder;
pub mod constants;
pub mod handlers;
pub mod init;
pub mod server;
pub mod transport;

pub use builder::{BuilderError, CineServerBuilder};
pub use handlers::{ErrorResponse, ServerState};
pub use init::{run_search, run_server};
pub use server::CineServer;
pub use transport::http::{HttpTransport, HttpTransportConfig};
