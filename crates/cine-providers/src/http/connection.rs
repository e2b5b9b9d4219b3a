//! Elasticsearch Connection
//!
//! The single backend handle shared by the inference and kNN adapters.
//! Built once at startup; cloning the inner `reqwest::Client` shares the pool.

use std::path::PathBuf;

use cine_domain::error::{Error, Result};
use reqwest::{Certificate, Client, Method, RequestBuilder};
use tracing::{debug, warn};

use super::provider::{HttpClientConfig, HttpClientProvider};
use crate::constants::{CONTENT_TYPE_JSON, ELASTICSEARCH_DEFAULT_URL};

/// Connection settings for an Elasticsearch cluster
///
/// Credentials are optional. Basic auth and API key auth are mutually
/// exclusive; certificate validation stays on unless explicitly disabled.
#[derive(Debug, Clone)]
pub struct ElasticsearchConnectionConfig {
    /// Cluster URL, e.g. `https://localhost:9200`
    pub url: String,
    /// Basic auth user
    pub username: Option<String>,
    /// Basic auth password
    pub password: Option<String>,
    /// API key sent as `Authorization: ApiKey <key>`
    pub api_key: Option<String>,
    /// PEM file with an extra trusted CA
    pub ca_cert_path: Option<PathBuf>,
    /// Skip TLS certificate validation
    pub accept_invalid_certs: bool,
    /// Pool and timeout settings
    pub http: HttpClientConfig,
}

impl Default for ElasticsearchConnectionConfig {
    fn default() -> Self {
        Self {
            url: ELASTICSEARCH_DEFAULT_URL.to_string(),
            username: None,
            password: None,
            api_key: None,
            ca_cert_path: None,
            accept_invalid_certs: false,
            http: HttpClientConfig::default(),
        }
    }
}

#[derive(Clone)]
enum Credentials {
    None,
    Basic { username: String, password: String },
    ApiKey(String),
}

impl Credentials {
    fn from_config(config: &ElasticsearchConnectionConfig) -> Result<Self> {
        match (&config.username, &config.password, &config.api_key) {
            (None, None, None) => Ok(Self::None),
            (Some(username), Some(password), None) => Ok(Self::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            (None, None, Some(key)) => Ok(Self::ApiKey(key.clone())),
            (Some(_), None, _) | (None, Some(_), _) => Err(Error::config(
                "backend username and password must be set together",
            )),
            (Some(_), Some(_), Some(_)) => Err(Error::config(
                "backend api_key cannot be combined with username/password",
            )),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::ApiKey(_) => "api_key",
        }
    }
}

/// Authenticated HTTP client for one Elasticsearch cluster
pub struct ElasticsearchConnection {
    client: Client,
    config: HttpClientConfig,
    base_url: String,
    credentials: Credentials,
}

impl ElasticsearchConnection {
    /// Build the connection and its HTTP client
    ///
    /// Fails on an empty URL, inconsistent credentials or an unreadable CA
    /// certificate.
    pub fn new(config: ElasticsearchConnectionConfig) -> Result<Self> {
        let base_url = config.url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::config("backend url cannot be empty"));
        }
        let credentials = Credentials::from_config(&config)?;

        let mut builder = Client::builder()
            .pool_max_idle_per_host(config.http.max_idle_per_host)
            .pool_idle_timeout(config.http.idle_timeout)
            .tcp_keepalive(config.http.keepalive)
            .timeout(config.http.timeout)
            .user_agent(config.http.user_agent.clone());

        if let Some(path) = &config.ca_cert_path {
            let pem = std::fs::read(path).map_err(|e| {
                Error::io_with_source(format!("failed to read CA certificate {}", path.display()), e)
            })?;
            let certificate = Certificate::from_pem(&pem).map_err(|e| {
                Error::configuration_with_source(
                    format!("invalid CA certificate {}", path.display()),
                    e,
                )
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        if config.accept_invalid_certs {
            warn!(
                url = %base_url,
                "TLS certificate validation is disabled for the search backend"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration_with_source("failed to build HTTP client", e))?;

        debug!(url = %base_url, auth = credentials.kind(), "Elasticsearch connection created");

        Ok(Self {
            client,
            config: config.http,
            base_url,
            credentials,
        })
    }

    /// Authentication scheme in use (`none`, `basic` or `api_key`)
    pub fn auth_kind(&self) -> &'static str {
        self.credentials.kind()
    }
}

impl HttpClientProvider for ElasticsearchConnection {
    fn client(&self) -> &Client {
        &self.client
    }

    fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let request = self
            .client
            .request(method, url)
            .header("Content-Type", CONTENT_TYPE_JSON);

        match &self.credentials {
            Credentials::None => request,
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::ApiKey(key) => request.header("Authorization", format!("ApiKey {key}")),
        }
    }
}

impl std::fmt::Debug for ElasticsearchConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticsearchConnection")
            .field("base_url", &self.base_url)
            .field("auth", &self.credentials.kind())
            .finish_non_exhaustive()
    }
}
