//! Search endpoint
//!
//! Runs the search use case for the `q` query parameter and returns the
//! ranked movies as a JSON array. A missing `q` is searched as the empty
//! string. Failures never carry partial results.

use cine_domain::Error;
use cine_domain::Movie;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, warn};

use super::ServerState;
use crate::constants::{
    ERROR_CODE_EMBEDDING_FAILED, ERROR_CODE_INTERNAL, ERROR_CODE_SEARCH_FAILED,
};

/// Error body returned with every non-2xx search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    /// Embedding backend failure
    pub fn embedding_failed(message: impl Into<String>) -> Self {
        Self::new(message, ERROR_CODE_EMBEDDING_FAILED)
    }

    /// Vector search backend failure
    pub fn search_failed(message: impl Into<String>) -> Self {
        Self::new(message, ERROR_CODE_SEARCH_FAILED)
    }

    /// Any other failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, ERROR_CODE_INTERNAL)
    }
}

/// Translate a domain error into an HTTP status and error body
///
/// Embedding and search backend failures are `502 Bad Gateway`; everything
/// else is `500`.
pub fn error_response(err: &Error) -> (Status, Json<ErrorResponse>) {
    if err.is_embedding_failure() {
        error!(error = %err, "Search failed while embedding the query");
        (
            Status::BadGateway,
            Json(ErrorResponse::embedding_failed(err.to_string())),
        )
    } else if err.is_backend_failure() {
        error!(error = %err, "Search failed while querying the index");
        (
            Status::BadGateway,
            Json(ErrorResponse::search_failed(err.to_string())),
        )
    } else {
        error!(error = %err, "Search failed");
        (
            Status::InternalServerError,
            Json(ErrorResponse::internal(err.to_string())),
        )
    }
}

/// Search failure for a search that exceeded `limit`
///
/// Reported like an unreachable backend, not as a distinct outcome.
pub fn timeout_error(limit: Duration) -> Error {
    warn!(timeout_ms = limit.as_millis(), "Search timed out");
    Error::search(format!("search timed out after {}ms", limit.as_millis()))
}

/// Semantic movie search
///
/// # Arguments
///
/// * `q` - Free-text query (default: empty)
#[get("/search?<q>")]
pub async fn search_movies(
    state: &State<ServerState>,
    q: Option<String>,
) -> Result<Json<Vec<Movie>>, (Status, Json<ErrorResponse>)> {
    let query = q.unwrap_or_default();

    let result = match state.search_timeout {
        Some(limit) => tokio::time::timeout(limit, state.search_service.search(&query))
            .await
            .unwrap_or_else(|_| Err(timeout_error(limit))),
        None => state.search_service.search(&query).await,
    };

    result.map(Json).map_err(|e| error_response(&e))
}
