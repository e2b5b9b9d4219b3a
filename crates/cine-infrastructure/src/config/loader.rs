//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values, using Figment.

use crate::config::types::{
    AppConfig, BackendConfig, BackendProvider, LoggingConfig, SearchConfig, ServerConfig,
};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use cine_domain::constants::SEARCH_NUM_CANDIDATES_MAX;
use cine_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `CINE_SERVER__PORT`)
    ///
    /// An explicit path must be readable; only the default locations are optional.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            let contents = std::fs::read_to_string(config_path).io_context(format!(
                "Failed to read config file {}",
                config_path.display()
            ))?;
            figment = figment.merge(Toml::string(&contents));
            log_config_loaded(config_path);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path);
        }

        // Double underscore separates nested keys so field names keep their underscores
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_backend_config(&config.backend)?;
    validate_search_config(&config.search)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<()> {
    if config.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_backend_config(config: &BackendConfig) -> Result<()> {
    if config.provider != BackendProvider::Elasticsearch {
        return Ok(());
    }
    let url = config.url.trim();
    if url.is_empty() {
        return Err(Error::config("Backend url cannot be empty"));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::config(format!(
            "Backend url must start with http:// or https://, got '{url}'"
        )));
    }
    if config.username.is_some() != config.password.is_some() {
        return Err(Error::config(
            "Backend username and password must be set together",
        ));
    }
    if config.api_key.is_some() && config.username.is_some() {
        return Err(Error::config(
            "Backend api_key cannot be combined with username/password",
        ));
    }
    if config.timeout_secs == 0 {
        return Err(Error::config("Backend timeout_secs cannot be 0"));
    }
    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<()> {
    if config.index.trim().is_empty() {
        return Err(Error::config("Search index cannot be empty"));
    }
    if config.vector_field.trim().is_empty() {
        return Err(Error::config("Search vector_field cannot be empty"));
    }
    if config.model_id.trim().is_empty() {
        return Err(Error::config("Search model_id cannot be empty"));
    }
    if config.k == 0 {
        return Err(Error::config("Search k must be at least 1"));
    }
    if config.num_candidates < config.k {
        return Err(Error::config(format!(
            "Search num_candidates ({}) must be >= k ({})",
            config.num_candidates, config.k
        )));
    }
    if config.num_candidates > SEARCH_NUM_CANDIDATES_MAX {
        return Err(Error::config(format!(
            "Search num_candidates cannot exceed {SEARCH_NUM_CANDIDATES_MAX}"
        )));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set server configuration
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set backend configuration
    pub fn with_backend(mut self, backend: BackendConfig) -> Self {
        self.config.backend = backend;
        self
    }

    /// Set search configuration
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
