//! Server-specific constants
//!
//! Error codes returned in JSON error bodies and header values used by the
//! CORS fairing.

// ============================================================================
// ERROR CODES
// ============================================================================

/// Embedding backend failed or was unreachable
pub const ERROR_CODE_EMBEDDING_FAILED: &str = "EMBEDDING_FAILED";

/// Vector search backend failed, was unreachable or rejected the query
pub const ERROR_CODE_SEARCH_FAILED: &str = "SEARCH_FAILED";

/// Any other failure
pub const ERROR_CODE_INTERNAL: &str = "INTERNAL_ERROR";

// ============================================================================
// CORS
// ============================================================================

/// Allowed origins
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Allowed methods
pub const CORS_ALLOW_METHODS: &str = "GET, OPTIONS";

/// Allowed request headers
pub const CORS_ALLOW_HEADERS: &str = "*";
