//! Tripadvisor Content API service
//!
//! Fetches location details and reviews, caches the raw JSON bodies, and turns
//! them into typed models. Upstream outages never surface to callers: each
//! public query substitutes its own fallback value instead.

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use super::transform;
use super::transport::{HttpTransport, Transport, TransportError};
use super::{Coordinates, FieldError, ReviewsSummary, SingleReview};
use crate::cache::Cache;
use crate::config::ServiceConfig;

/// Time-to-live for cached responses (24 hours, as recommended by the API docs)
pub const CACHE_TIMEOUT: Duration = Duration::from_secs(86_400);

/// No usable data could be obtained for a location
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The upstream API could not be reached or returned an error
    #[error("Tripadvisor API unavailable: {0}")]
    Unavailable(#[from] TransportError),
}

/// Connection service for the Tripadvisor Content API
///
/// Construct with [`TripadvisorService::new`]; caching is off unless a cache
/// is supplied through [`with_cache`](Self::with_cache).
#[derive(Clone)]
pub struct TripadvisorService {
    config: ServiceConfig,
    transport: Arc<dyn Transport>,
    cache: Option<Arc<dyn Cache>>,
}

impl TripadvisorService {
    /// Create a service using the default HTTP transport and no cache
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            transport: Arc::new(HttpTransport::new()),
            cache: None,
        }
    }

    /// Use `cache` as a read-through cache for raw responses
    pub fn with_cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replace the HTTP transport
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Connection settings the service was built with
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the coordinates of a location
    ///
    /// Falls back to `(0.0, 0.0)` when the API is unavailable. A details
    /// response without usable `latitude`/`longitude` is reported as an error.
    pub async fn get_lat_long(&self, location_id: u64) -> Result<Coordinates, FieldError> {
        match self.fetch_location_details(location_id).await {
            Ok(details) => transform::coordinates_from_details(&details),
            Err(e) => {
                tracing::warn!(location_id, error = %e, "using default coordinates");
                Ok(Coordinates::default())
            }
        }
    }

    /// Returns the review summary of a location, or `None` if the API is
    /// unavailable or any required field is missing
    pub async fn get_hotel_reviews_details(&self, location_id: u64) -> Option<ReviewsSummary> {
        match self.fetch_location_details(location_id).await {
            Ok(details) => transform::summary_from_details(&details),
            Err(e) => {
                tracing::warn!(location_id, error = %e, "review summary unavailable");
                None
            }
        }
    }

    /// Returns the reviews of a location in response order
    ///
    /// The list is empty when the API is unavailable.
    pub async fn get_reviews_list(&self, location_id: u64) -> Vec<SingleReview> {
        match self.fetch_reviews(location_id).await {
            Ok(reviews) => transform::reviews_from_response(&reviews),
            Err(e) => {
                tracing::warn!(location_id, error = %e, "reviews unavailable");
                Vec::new()
            }
        }
    }

    /// Cached or fresh body of `GET {location_id}/details`
    async fn fetch_location_details(&self, location_id: u64) -> Result<Value, ServiceError> {
        let body = self
            .api_call(
                &format!("tripadvisor_detail_cache_{}", location_id),
                &format!("{}/details", location_id),
            )
            .await?;
        Ok(body)
    }

    /// Cached or fresh body of `GET {location_id}/reviews`
    async fn fetch_reviews(&self, location_id: u64) -> Result<Value, ServiceError> {
        let body = self
            .api_call(
                &format!("tripadvisor_reviews_cache_{}", location_id),
                &format!("{}/reviews", location_id),
            )
            .await?;
        Ok(body)
    }

    /// Generic API call through the cache. Only successful responses are cached.
    async fn api_call(&self, cache_key: &str, url_path: &str) -> Result<Value, TransportError> {
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(cache_key).filter(|value| !value.is_null()) {
                tracing::debug!(cache_key, "cache hit");
                return Ok(cached);
            }
        }

        let url = self.config.api_url().join(url_path)?;
        tracing::debug!(%url, "requesting Tripadvisor API");

        let body = self
            .transport
            .get_json(
                url,
                &[
                    ("key", self.config.api_key()),
                    ("language", self.config.default_language_code()),
                ],
            )
            .await?;

        if let Some(cache) = &self.cache {
            cache.set(cache_key, &body, CACHE_TIMEOUT);
        }

        Ok(body)
    }
}
