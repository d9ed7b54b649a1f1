//! Client configuration.
//!
//! The base URL is a precondition for every operation, so it is resolved
//! once when the client is built rather than on each request.

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "BASEURL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `BASEURL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration against an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV) {
            Some(base_url) if !base_url.trim().is_empty() => Ok(Self::new(base_url)),
            _ => Err(ConfigError::MissingBaseUrl { key: BASE_URL_ENV }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_read_from_lookup() {
        let config = Config::from_lookup(|key| {
            (key == "BASEURL").then(|| "http://localhost:8080/v1".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert_eq!(err, ConfigError::MissingBaseUrl { key: "BASEURL" });
        assert_eq!(err.to_string(), "BASEURL variable must be set");
    }

    #[test]
    fn blank_base_url_counts_as_missing() {
        assert!(Config::from_lookup(|_| Some("  ".to_string())).is_err());
    }
}
