//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cine.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cine";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CINE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default bound on one orchestrated search, in milliseconds
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 30_000;

// ============================================================================
// BACKEND CONSTANTS
// ============================================================================

/// Default per-request backend timeout in seconds
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "CINE_LOG";

/// File stem used for rotated log files
pub const LOG_FILE_STEM: &str = "cine";
