//! Core data models for Tripadvisor location data
//!
//! This module contains the typed shapes produced from raw API responses,
//! together with the HTTP transport, the response transformers, and the
//! service tying them together.

pub mod service;
pub mod transform;
pub mod transport;

pub use service::{ServiceError, TripadvisorService};
pub use transform::FieldError;
pub use transport::{HttpTransport, Transport, TransportError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic position of a location
///
/// The default value `(0.0, 0.0)` is what callers receive when the API is
/// unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl From<Coordinates> for (f64, f64) {
    fn from(coords: Coordinates) -> Self {
        (coords.latitude, coords.longitude)
    }
}

/// Rating of a single location feature, such as cleanliness or service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subrating {
    /// Display name of the rated feature
    pub localized_name: String,
    /// Image showing the rating bubbles
    pub rating_image_url: String,
}

/// Aggregate review state of one location at fetch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewsSummary {
    /// Image showing the overall rating bubbles
    pub rating_image_url: String,
    /// Total number of reviews
    pub num_reviews: u64,
    /// Human readable ranking, e.g. "#3 of 120 hotels in Punta Cana"
    pub ranking_string: String,
    /// Link to the location page on Tripadvisor
    pub web_url: String,
    /// Per-feature ratings in response order
    pub subratings: Vec<Subrating>,
}

/// A single review written by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleReview {
    pub published_date: NaiveDate,
    pub rating_image_url: String,
    pub text: String,
    pub title: String,
    pub username: String,
    /// Kind of trip, or a placeholder when the reviewer gave none
    pub trip_type: String,
}
