//! Movie result record

use serde::{Deserialize, Serialize};

/// Value Object: Canonical Movie Record
///
/// The shape every search result takes on its way out of the system,
/// whatever the store's own field names are. Every field is always present;
/// missing source data is represented by the type's default value.
///
/// Serialized with PascalCase keys (`Title`, `ExternalId`, ...), which is the
/// wire format the UI consumes.
///
/// ## Example
///
/// ```rust
/// use cine_domain::value_objects::Movie;
///
/// let movie = Movie {
///     title: "The Matrix".to_string(),
///     external_id: 603,
///     ..Movie::default()
/// };
/// let json = serde_json::to_value(&movie).unwrap();
/// assert_eq!(json["ExternalId"], 603);
/// assert_eq!(json["Overview"], "");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    /// Movie title
    pub title: String,
    /// External (TMDb) identifier
    pub external_id: i64,
    /// Release date as stored, e.g. `1999-03-31`
    pub release_date: String,
    /// Average user rating
    pub rating_average: f64,
    /// Number of user ratings
    pub rating_count: i64,
    /// Release status, e.g. `Released`
    pub release_status: String,
    /// Plot overview
    pub overview: String,
}
