//! Domain layer constants
//!
//! Search parameters and store field names that are part of the domain
//! contract. Infrastructure-specific constants live in
//! `cine_infrastructure::constants`.

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Index holding the movie documents and their overview embeddings
pub const DEFAULT_INDEX: &str = "tmdb-with-embeddings";

/// Dense vector field compared against the query embedding
pub const DEFAULT_VECTOR_FIELD: &str = "Embedding_Overview.predicted_value";

/// Sentence-embedding model deployed in the search engine
pub const DEFAULT_MODEL_ID: &str = "sentence-transformers__msmarco-minilm-l-12-v3";

/// Dimensionality of vectors produced by [`DEFAULT_MODEL_ID`]
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Number of results returned by a kNN search
pub const SEARCH_K: usize = 10;

/// Candidate pool considered by the approximate kNN search before ranking
pub const SEARCH_NUM_CANDIDATES: usize = 100;

/// Upper bound the search engine accepts for `num_candidates`
pub const SEARCH_NUM_CANDIDATES_MAX: usize = 10_000;

// ============================================================================
// STORE SOURCE FIELDS
// ============================================================================

/// Movie title
pub const FIELD_TITLE: &str = "Title";

/// External (TMDb) movie id
pub const FIELD_EXTERNAL_ID: &str = "TMDb_Id";

/// Release date as stored (free-form date string)
pub const FIELD_RELEASE_DATE: &str = "Release_Date";

/// Average user rating
pub const FIELD_RATING_AVERAGE: &str = "Rating_Average";

/// Number of user ratings
pub const FIELD_RATING_COUNT: &str = "Rating_Count";

/// Release status (e.g. "Released")
pub const FIELD_RELEASE_STATUS: &str = "Release_Status";

/// Plot overview
pub const FIELD_OVERVIEW: &str = "Overview";

/// Source fields requested from the store for every hit
pub const MOVIE_SOURCE_FIELDS: [&str; 7] = [
    FIELD_TITLE,
    FIELD_EXTERNAL_ID,
    FIELD_RELEASE_DATE,
    FIELD_RATING_AVERAGE,
    FIELD_RATING_COUNT,
    FIELD_RELEASE_STATUS,
    FIELD_OVERVIEW,
];
