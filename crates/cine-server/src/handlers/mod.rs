//! HTTP route handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/search?q=` | GET | Semantic movie search, at most `k` results |
//! | `/health` | GET | Search backend reachability |

pub mod health;
pub mod search;

use cine_application::ports::SearchServiceInterface;
use cine_infrastructure::health::BackendHealthChecker;
use std::sync::Arc;
use std::time::Duration;

pub use health::health_check;
pub use search::{ErrorResponse, error_response, search_movies, timeout_error};

/// Shared state handed to every route through Rocket's managed state
#[derive(Clone)]
pub struct ServerState {
    /// Search use case
    pub search_service: Arc<dyn SearchServiceInterface>,
    /// Backend health check used by `/health`
    pub health: Arc<BackendHealthChecker>,
    /// Bound on one whole search; `None` waits indefinitely
    pub search_timeout: Option<Duration>,
}
