//! Command-line interface parsing for the `tripadvisor` binary
//!
//! Connection settings can come from flags or from the same environment
//! variables the service is usually deployed with.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use crate::cache::CacheManager;
use crate::config::{ConfigError, ServiceConfig};

/// Production endpoint of the Tripadvisor Content API location resource
pub const DEFAULT_API_URL: &str = "https://api.content.tripadvisor.com/api/v1/location/";

/// Error types for turning CLI arguments into a runnable service
#[derive(Debug, Error)]
pub enum CliError {
    /// Connection settings failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No home directory to place the default cache in
    #[error("Could not determine a cache directory; pass --cache-dir or --no-cache")]
    NoCacheDir,
}

/// Query Tripadvisor location details and reviews
#[derive(Parser, Debug)]
#[command(name = "tripadvisor")]
#[command(about = "Query Tripadvisor location coordinates, review summaries and reviews")]
#[command(version)]
pub struct Cli {
    /// Base URL of the location API, with a trailing slash
    #[arg(long, env = "TRIPADVISOR_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API key sent with every request
    #[arg(long, env = "TRIPADVISOR_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Language code for localized content
    #[arg(long, env = "TRIPADVISOR_DEFAULT_LANGUAGE_CODE", default_value = "en")]
    pub language: String,

    /// Directory for cached responses (defaults to the user cache directory)
    #[arg(long, value_name = "DIR", conflicts_with = "no_cache")]
    pub cache_dir: Option<PathBuf>,

    /// Always query the API, without reading or writing the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Log cache and request activity to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The query to run
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the latitude and longitude of a location
    LatLong { location_id: u64 },
    /// Print the review summary of a location
    Details { location_id: u64 },
    /// Print the reviews of a location
    Reviews { location_id: u64 },
}

impl Command {
    pub fn location_id(&self) -> u64 {
        match *self {
            Command::LatLong { location_id }
            | Command::Details { location_id }
            | Command::Reviews { location_id } => location_id,
        }
    }
}

impl Cli {
    /// Validated connection settings
    pub fn service_config(&self) -> Result<ServiceConfig, CliError> {
        Ok(ServiceConfig::new(
            &self.api_url,
            self.api_key.as_str(),
            self.language.as_str(),
        )?)
    }

    /// The cache to use, or `None` when caching is disabled
    pub fn cache_manager(&self) -> Result<Option<CacheManager>, CliError> {
        if self.no_cache {
            return Ok(None);
        }
        match &self.cache_dir {
            Some(dir) => Ok(Some(CacheManager::with_dir(dir.clone()))),
            None => CacheManager::new().map(Some).ok_or(CliError::NoCacheDir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["tripadvisor", "--api-key", "k"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_parse_subcommands() {
        assert_eq!(
            parse(&["lat-long", "247957"]).command,
            Command::LatLong { location_id: 247957 }
        );
        assert_eq!(
            parse(&["details", "12889941"]).command,
            Command::Details { location_id: 12889941 }
        );
        assert_eq!(parse(&["reviews", "1"]).command.location_id(), 1);
    }

    #[test]
    fn test_non_numeric_location_id_is_rejected() {
        let result = Cli::try_parse_from(["tripadvisor", "--api-key", "k", "details", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        let result = Cli::try_parse_from(["tripadvisor", "--api-key", "k"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_service_config_from_flags() {
        let cli = parse(&[
            "--api-url",
            "https://api.example.com/v1/location/",
            "--language",
            "sk",
            "details",
            "1",
        ]);

        let config = cli.service_config().expect("valid config");
        assert_eq!(config.api_url().as_str(), "https://api.example.com/v1/location/");
        assert_eq!(config.api_key(), "k");
        assert_eq!(config.default_language_code(), "sk");
    }

    #[test]
    fn test_service_config_rejects_url_without_trailing_slash() {
        let cli = parse(&["--api-url", "https://api.example.com/v1/location", "details", "1"]);

        let err = cli.service_config().unwrap_err();
        assert!(err.to_string().contains("trailing slash"));
    }

    #[test]
    fn test_no_cache_disables_cache() {
        let cli = parse(&["--no-cache", "reviews", "1"]);
        assert!(cli.cache_manager().expect("no error").is_none());
    }

    #[test]
    fn test_cache_dir_overrides_default() {
        let cli = parse(&["--cache-dir", "/tmp/tripadvisor-test", "reviews", "1"]);

        let cache = cli.cache_manager().expect("no error").expect("cache enabled");
        assert_eq!(cache.dir(), std::path::Path::new("/tmp/tripadvisor-test"));
    }

    #[test]
    fn test_cache_dir_conflicts_with_no_cache() {
        let result = Cli::try_parse_from([
            "tripadvisor",
            "--api-key",
            "k",
            "--no-cache",
            "--cache-dir",
            "/tmp/x",
            "reviews",
            "1",
        ]);
        assert!(result.is_err());
    }
}
