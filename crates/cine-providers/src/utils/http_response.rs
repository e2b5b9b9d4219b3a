//! HTTP Response Utilities
//!
//! Helper functions for processing Elasticsearch responses.
//! These are shared utilities, not ports.

use cine_domain::error::{Error, Result};
use reqwest::Response;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::constants::{ELASTICSEARCH_INDEX_NOT_FOUND, ERROR_MSG_REQUEST_TIMEOUT};

/// The backend call a response belongs to
///
/// Decides which error class a failure is reported as.
#[derive(Debug, Clone, Copy)]
pub enum BackendCall<'a> {
    /// Trained model inference
    Inference {
        /// Model the text was sent to
        model_id: &'a str,
    },
    /// kNN search
    Search {
        /// Index that was searched
        index: &'a str,
    },
    /// Cluster health check
    Health,
}

impl fmt::Display for BackendCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inference { model_id } => write!(f, "inference with model '{model_id}'"),
            Self::Search { index } => write!(f, "search on index '{index}'"),
            Self::Health => f.write_str("cluster health check"),
        }
    }
}

impl BackendCall<'_> {
    fn failure(&self, details: String) -> Error {
        match self {
            Self::Inference { .. } => Error::embedding(format!("{self} failed: {details}")),
            Self::Search { .. } => Error::search(format!("{self} failed: {details}")),
            Self::Health => Error::network(format!("{self} failed: {details}")),
        }
    }
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `call` - The backend call, used to classify failures
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(response: Response, call: BackendCall<'_>) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::classify_status(call, status.as_u16(), &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| call.failure(format!("response parse failed: {e}")))
    }

    /// Map a transport level failure (connect, TLS, timeout) to a domain error
    pub fn transport_error(call: BackendCall<'_>, error: &reqwest::Error, timeout: Duration) -> Error {
        if error.is_timeout() {
            call.failure(format!("{ERROR_MSG_REQUEST_TIMEOUT} {timeout:?}"))
        } else {
            call.failure(format!("backend unreachable: {error}"))
        }
    }

    /// Map a non-2xx status and body to a domain error
    pub fn classify_status(call: BackendCall<'_>, code: u16, body: &str) -> Error {
        let (error_type, reason) = error_details(body);

        match (call, code) {
            (BackendCall::Inference { .. }, 401 | 403) => {
                call.failure(format!("credentials rejected ({code}): {reason}"))
            }
            (_, 401 | 403) => Error::authentication(format!(
                "{call} rejected credentials ({code}): {reason}"
            )),
            (BackendCall::Search { index }, 404) => Error::index_not_found(index),
            (BackendCall::Search { index }, _)
                if error_type.as_deref() == Some(ELASTICSEARCH_INDEX_NOT_FOUND) =>
            {
                Error::index_not_found(index)
            }
            (BackendCall::Search { .. }, 400) if mentions_dimensions(&reason) => call.failure(
                format!("query vector dimension mismatch: {reason}"),
            ),
            (_, 500..=599) => call.failure(format!("server error ({code}): {reason}")),
            _ => call.failure(format!("request failed ({code}): {reason}")),
        }
    }
}

/// Pull `error.type` and `error.reason` out of an Elasticsearch error body
///
/// Falls back to the raw body when it is not the usual error document.
fn error_details(body: &str) -> (Option<String>, String) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (None, body.to_string());
    };
    let error = &value["error"];
    let error_type = error["type"].as_str().map(str::to_string);
    let reason = error["reason"]
        .as_str()
        .or_else(|| error.as_str())
        .map_or_else(|| body.to_string(), str::to_string);
    (error_type, reason)
}

fn mentions_dimensions(reason: &str) -> bool {
    let reason = reason.to_ascii_lowercase();
    reason.contains("dimension") || reason.contains("dims")
}
