//! Connection settings for the Tripadvisor Content API

use thiserror::Error;
use url::Url;

/// Errors raised while validating service configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be parsed
    #[error("Invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Relative endpoint paths are joined onto the base URL, which drops the
    /// last path segment unless it ends with a slash
    #[error("API URL must end with a trailing slash: '{0}'")]
    MissingTrailingSlash(String),

    /// A required setting was empty
    #[error("Missing required setting: {0}")]
    MissingSetting(&'static str),
}

/// Validated settings for [`TripadvisorService`](crate::TripadvisorService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    api_url: Url,
    api_key: String,
    default_language_code: String,
}

impl ServiceConfig {
    /// Builds a configuration, checking that `api_url` is a valid URL ending in `/`
    /// and that the key and language code are non-empty.
    pub fn new(
        api_url: &str,
        api_key: impl Into<String>,
        default_language_code: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        let default_language_code = default_language_code.into();

        if api_url.is_empty() {
            return Err(ConfigError::MissingSetting("api_url"));
        }
        if !api_url.ends_with('/') {
            return Err(ConfigError::MissingTrailingSlash(api_url.to_string()));
        }
        let parsed = Url::parse(api_url).map_err(|source| ConfigError::InvalidUrl {
            url: api_url.to_string(),
            source,
        })?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingSetting("api_key"));
        }
        if default_language_code.trim().is_empty() {
            return Err(ConfigError::MissingSetting("default_language_code"));
        }

        Ok(Self {
            api_url: parsed,
            api_key,
            default_language_code,
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn default_language_code(&self) -> &str {
        &self.default_language_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ServiceConfig::new(
            "https://api.content.tripadvisor.com/api/v1/location/",
            "secret",
            "en",
        )
        .expect("Config should be valid");

        assert_eq!(
            config.api_url().as_str(),
            "https://api.content.tripadvisor.com/api/v1/location/"
        );
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.default_language_code(), "en");
    }

    #[test]
    fn test_missing_trailing_slash_is_rejected() {
        let result = ServiceConfig::new("https://api.example.com/api/v1/location", "k", "en");
        match result {
            Err(ConfigError::MissingTrailingSlash(url)) => {
                assert_eq!(url, "https://api.example.com/api/v1/location");
            }
            other => panic!("Expected MissingTrailingSlash, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_url_is_rejected() {
        let result = ServiceConfig::new("not a url/", "k", "en");
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_empty_settings_are_rejected() {
        assert!(matches!(
            ServiceConfig::new("", "k", "en"),
            Err(ConfigError::MissingSetting("api_url"))
        ));
        assert!(matches!(
            ServiceConfig::new("https://api.example.com/", " ", "en"),
            Err(ConfigError::MissingSetting("api_key"))
        ));
        assert!(matches!(
            ServiceConfig::new("https://api.example.com/", "k", ""),
            Err(ConfigError::MissingSetting("default_language_code"))
        ));
    }
}
