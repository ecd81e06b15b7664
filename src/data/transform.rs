//! Conversion of raw API responses into typed models
//!
//! Every function here is pure: it takes the JSON body exactly as returned by
//! the API (or the cache) and produces model values. Optional upstream fields
//! are tolerated independently by each transformer.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use thiserror::Error;

use super::{Coordinates, ReviewsSummary, SingleReview, Subrating};

/// Trip type reported for reviews that don't state one
pub const UNKNOWN_TRIP_TYPE: &str = "Neznámy";

/// Errors raised when a response lacks data a transformer depends on
#[derive(Debug, Error)]
pub enum FieldError {
    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(&'static str),

    /// Field present but its value cannot be interpreted
    #[error("Invalid value for field {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// Response does not have the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Scalar that the API sends either as a JSON number or as a numeric string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(Number),
    Text(String),
}

impl Numeric {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) => n.as_f64(),
            Numeric::Text(s) => s.trim().parse().ok(),
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match self {
            Numeric::Number(n) => n.as_u64(),
            Numeric::Text(s) => s.trim().parse().ok(),
        }
    }

    fn raw(&self) -> String {
        match self {
            Numeric::Number(n) => n.to_string(),
            Numeric::Text(s) => s.clone(),
        }
    }
}

/// Coordinate fields of `GET {location_id}/details`
#[derive(Debug, Deserialize)]
struct CoordinatesRecord {
    latitude: Option<Numeric>,
    longitude: Option<Numeric>,
}

/// Review summary fields of `GET {location_id}/details`
#[derive(Debug, Deserialize)]
struct SummaryRecord {
    rating_image_url: Option<String>,
    num_reviews: Option<Numeric>,
    ranking_data: Option<RankingData>,
    web_url: Option<String>,
    /// Keyed by subrating index; values kept in response order
    subratings: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RankingData {
    ranking_string: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubratingRecord {
    localized_name: Option<String>,
    rating_image_url: Option<String>,
}

/// A single entry of the `data` array of `GET {location_id}/reviews`
#[derive(Debug, Deserialize)]
struct ReviewRecord {
    published_date: Option<String>,
    rating_image_url: Option<String>,
    text: Option<String>,
    title: Option<String>,
    user: Option<ReviewUser>,
    trip_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReviewUser {
    username: Option<String>,
}

/// Extracts latitude and longitude from a location details response
///
/// Both fields are required; numeric strings are accepted.
pub fn coordinates_from_details(details: &Value) -> Result<Coordinates, FieldError> {
    let record = CoordinatesRecord::deserialize(details)?;

    Ok(Coordinates {
        latitude: coerce_f64(record.latitude, "latitude")?,
        longitude: coerce_f64(record.longitude, "longitude")?,
    })
}

fn coerce_f64(value: Option<Numeric>, field: &'static str) -> Result<f64, FieldError> {
    let value = value.ok_or(FieldError::MissingField(field))?;
    value.as_f64().ok_or_else(|| FieldError::InvalidValue {
        field,
        value: value.raw(),
    })
}

/// Builds the review summary from a location details response
///
/// Returns `None` when `rating_image_url`, `num_reviews`, or `web_url` is
/// missing, or when `ranking_data` exists without a `ranking_string`. An absent
/// `ranking_data` yields an empty ranking string.
pub fn summary_from_details(details: &Value) -> Option<ReviewsSummary> {
    let record = SummaryRecord::deserialize(details).ok()?;

    let ranking_string = match record.ranking_data {
        Some(ranking) => ranking.ranking_string?,
        None => String::new(),
    };

    let subratings = record
        .subratings
        .unwrap_or_default()
        .values()
        .filter_map(subrating_from_value)
        .collect();

    Some(ReviewsSummary {
        rating_image_url: record.rating_image_url?,
        num_reviews: record.num_reviews?.as_u64()?,
        ranking_string,
        web_url: record.web_url?,
        subratings,
    })
}

/// Subratings without a rating image are not displayable and are skipped
fn subrating_from_value(value: &Value) -> Option<Subrating> {
    let record = SubratingRecord::deserialize(value).ok()?;
    let rating_image_url = record.rating_image_url.filter(|url| !url.is_empty())?;

    Some(Subrating {
        localized_name: record.localized_name?,
        rating_image_url,
    })
}

/// Builds the review list from a reviews response, preserving response order
///
/// Entries without a rating image are dropped silently; entries missing any
/// other field are dropped with a warning.
pub fn reviews_from_response(response: &Value) -> Vec<SingleReview> {
    let Some(entries) = response.get("data").and_then(Value::as_array) else {
        tracing::warn!("reviews response has no data array");
        return Vec::new();
    };

    entries.iter().filter_map(review_from_value).collect()
}

fn review_from_value(entry: &Value) -> Option<SingleReview> {
    let record = match ReviewRecord::deserialize(entry) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "skipping malformed review entry");
            return None;
        }
    };

    let rating_image_url = record
        .rating_image_url
        .as_ref()
        .filter(|url| !url.is_empty())?
        .clone();

    match build_review(record, rating_image_url) {
        Ok(review) => Some(review),
        Err(e) => {
            tracing::warn!(error = %e, "skipping incomplete review entry");
            None
        }
    }
}

fn build_review(
    record: ReviewRecord,
    rating_image_url: String,
) -> Result<SingleReview, FieldError> {
    let published_date = record
        .published_date
        .ok_or(FieldError::MissingField("published_date"))?;

    Ok(SingleReview {
        published_date: parse_published_date(&published_date)?,
        rating_image_url,
        text: record.text.ok_or(FieldError::MissingField("text"))?,
        title: record.title.ok_or(FieldError::MissingField("title"))?,
        username: record
            .user
            .and_then(|user| user.username)
            .ok_or(FieldError::MissingField("user.username"))?,
        trip_type: record
            .trip_type
            .unwrap_or_else(|| UNKNOWN_TRIP_TYPE.to_string()),
    })
}

/// Parses the calendar date from a timestamp such as "2023-09-14T10:22:31Z"
///
/// Only the first 10 characters are read.
pub fn parse_published_date(timestamp: &str) -> Result<NaiveDate, FieldError> {
    let invalid = || FieldError::InvalidValue {
        field: "published_date",
        value: timestamp.to_string(),
    };

    let day = timestamp.get(..10).ok_or_else(invalid)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| invalid())
}
