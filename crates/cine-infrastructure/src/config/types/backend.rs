//! Search backend configuration types

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use cine_providers::constants::ELASTICSEARCH_DEFAULT_URL;
use cine_providers::http::{ElasticsearchConnectionConfig, HttpClientConfig};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BACKEND_TIMEOUT_SECS;

/// Which backend serves inference and kNN search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    /// Elasticsearch cluster with a deployed sentence embedding model
    #[default]
    Elasticsearch,
    /// Offline providers returning deterministic vectors and no hits
    Null,
}

impl fmt::Display for BackendProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elasticsearch => f.write_str("elasticsearch"),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Search backend connection configuration
///
/// Credentials come from the config file or from `CINE_BACKEND__USERNAME`,
/// `CINE_BACKEND__PASSWORD` and `CINE_BACKEND__API_KEY`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend kind
    pub provider: BackendProvider,
    /// Cluster URL
    pub url: String,
    /// Basic auth user
    pub username: Option<String>,
    /// Basic auth password
    pub password: Option<String>,
    /// API key (exclusive with basic auth)
    pub api_key: Option<String>,
    /// Extra trusted CA certificate (PEM)
    pub ca_cert_path: Option<PathBuf>,
    /// Disable TLS certificate validation
    pub accept_invalid_certs: bool,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: BackendProvider::default(),
            url: ELASTICSEARCH_DEFAULT_URL.to_string(),
            username: None,
            password: None,
            api_key: None,
            ca_cert_path: None,
            accept_invalid_certs: false,
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Connection settings for the Elasticsearch adapters
    pub fn connection_config(&self) -> ElasticsearchConnectionConfig {
        ElasticsearchConnectionConfig {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            api_key: self.api_key.clone(),
            ca_cert_path: self.ca_cert_path.clone(),
            accept_invalid_certs: self.accept_invalid_certs,
            http: HttpClientConfig::with_timeout(Duration::from_secs(self.timeout_secs)),
        }
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "***");
        f.debug_struct("BackendConfig")
            .field("provider", &self.provider)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("api_key", &redact(&self.api_key))
            .field("ca_cert_path", &self.ca_cert_path)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
