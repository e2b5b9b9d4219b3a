//! Configuration types module

pub mod app;
pub mod backend;
pub mod logging;
pub mod search;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use backend::{BackendConfig, BackendProvider};
pub use logging::LoggingConfig;
pub use search::SearchConfig;
pub use server::ServerConfig;
