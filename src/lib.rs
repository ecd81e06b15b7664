//! Tripadvisor Content API client
//!
//! Wraps the location details and reviews endpoints, normalizes responses into
//! typed models, and caches raw responses through a pluggable [`cache::Cache`].

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;

pub use config::{ConfigError, ServiceConfig};
pub use data::{
    Coordinates, FieldError, ReviewsSummary, ServiceError, SingleReview, Subrating,
    TripadvisorService,
};
