//! Tests for the canonical movie record

use cine_domain::Movie;
use serde_json::json;

#[test]
fn test_movie_serializes_with_pascal_case_keys() {
    let movie = Movie {
        title: "The Matrix".to_string(),
        external_id: 603,
        release_date: "1999-03-31".to_string(),
        rating_average: 8.2,
        rating_count: 24000,
        release_status: "Released".to_string(),
        overview: "A computer hacker...".to_string(),
    };

    let value = serde_json::to_value(&movie).unwrap();
    assert_eq!(
        value,
        json!({
            "Title": "The Matrix",
            "ExternalId": 603,
            "ReleaseDate": "1999-03-31",
            "RatingAverage": 8.2,
            "RatingCount": 24000,
            "ReleaseStatus": "Released",
            "Overview": "A computer hacker..."
        })
    );
}

#[test]
fn test_default_movie_has_every_field() {
    let value = serde_json::to_value(Movie::default()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 7);
    assert!(object.values().all(|v| !v.is_null()));
    assert_eq!(object["Title"], "");
    assert_eq!(object["ExternalId"], 0);
    assert_eq!(object["RatingAverage"], 0.0);
}

#[test]
fn test_movie_deserializes_from_wire_format() {
    let movie: Movie = serde_json::from_value(json!({
        "Title": "Heat",
        "ExternalId": 949,
        "ReleaseDate": "1995-12-15",
        "RatingAverage": 7.9,
        "RatingCount": 6000,
        "ReleaseStatus": "Released",
        "Overview": "Obsessive master thief"
    }))
    .unwrap();

    assert_eq!(movie.external_id, 949);
    assert_eq!(movie.title, "Heat");
}
