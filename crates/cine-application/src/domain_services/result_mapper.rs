//! Result Mapper
//!
//! Translates raw vector store hits into canonical [`Movie`] records.
//!
//! The mapper is total: a missing or unusable field is replaced with the
//! field's default and logged at `debug`, never raised. Numeric fields are
//! accepted either as JSON numbers or as numeric strings, since the movie
//! indexer writes them as strings.
//!
//! | Store field | Movie field | Default |
//! |-------------|-------------|---------|
//! | `Title` | `Title` | `""` |
//! | `TMDb_Id` | `ExternalId` | `0` |
//! | `Release_Date` | `ReleaseDate` | `""` |
//! | `Rating_Average` | `RatingAverage` | `0.0` |
//! | `Rating_Count` | `RatingCount` | `0` |
//! | `Release_Status` | `ReleaseStatus` | `""` |
//! | `Overview` | `Overview` | `""` |

use cine_domain::constants::{
    FIELD_EXTERNAL_ID, FIELD_OVERVIEW, FIELD_RATING_AVERAGE, FIELD_RATING_COUNT,
    FIELD_RELEASE_DATE, FIELD_RELEASE_STATUS, FIELD_TITLE,
};
use cine_domain::{Movie, RawHit};
use serde_json::Value;
use tracing::debug;

/// Map raw hits to movies, preserving the store's ranking order
pub fn map_hits(hits: &[RawHit]) -> Vec<Movie> {
    hits.iter().map(map_hit).collect()
}

/// Map a single raw hit to a movie
pub fn map_hit(hit: &RawHit) -> Movie {
    Movie {
        title: string_field(hit, FIELD_TITLE),
        external_id: int_field(hit, FIELD_EXTERNAL_ID),
        release_date: string_field(hit, FIELD_RELEASE_DATE),
        rating_average: float_field(hit, FIELD_RATING_AVERAGE),
        rating_count: int_field(hit, FIELD_RATING_COUNT),
        release_status: string_field(hit, FIELD_RELEASE_STATUS),
        overview: string_field(hit, FIELD_OVERVIEW),
    }
}

fn string_field(hit: &RawHit, name: &str) -> String {
    hit.field(name).and_then(as_text).unwrap_or_else(|| {
        log_default(hit, name);
        String::new()
    })
}

fn int_field(hit: &RawHit, name: &str) -> i64 {
    hit.field(name).and_then(as_integer).unwrap_or_else(|| {
        log_default(hit, name);
        0
    })
}

fn float_field(hit: &RawHit, name: &str) -> f64 {
    hit.field(name).and_then(as_float).unwrap_or_else(|| {
        log_default(hit, name);
        0.0
    })
}

fn log_default(hit: &RawHit, field: &str) {
    debug!(
        field,
        doc_id = hit.id.as_deref().unwrap_or("<unknown>"),
        "Field missing or unusable, substituting default"
    );
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_number(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64)
        .then_some(f as i64)
}
