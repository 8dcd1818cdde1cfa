//! Where the backend lives and where the session token is kept.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Fixed key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Environment variable naming the backend base URL.
pub const API_BASE_URL_VAR: &str = "CRM_API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed as an absolute http(s) URL.
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Client-side configuration for the console.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the REST API, without a trailing slash.
    pub api_base_url: String,

    /// Key used for the persisted bearer token.
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    /// Uses `CRM_API_BASE_URL` captured at compile time, which is how the
    /// browser bundle is pointed at its backend.
    fn default() -> Self {
        Self::with_base_url(option_env!("CRM_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl ClientConfig {
    /// Configuration targeting `base_url` with the standard storage key.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
        }
    }

    /// Defaults with a runtime `CRM_API_BASE_URL` override applied.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBaseUrl`] when the resolved URL fails [`Self::validate`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = match std::env::var(API_BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the base URL is an absolute http(s) URL.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBaseUrl`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason: reason.to_string(),
        };
        let parsed = Url::parse(&self.api_base_url).map_err(|err| invalid(&err.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn cleanup_env_vars() {
        unsafe {
            std::env::remove_var(API_BASE_URL_VAR);
        }
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = ClientConfig::with_base_url("https://crm.example.com/api/");

        assert_eq!(config.api_base_url, "https://crm.example.com/api");
        assert_eq!(config.token_storage_key, "token");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(ClientConfig::with_base_url("not a url").validate().is_err());
        assert!(matches!(
            ClientConfig::with_base_url("ftp://files.example.com").validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_without_override() {
        cleanup_env_vars();
        let config = ClientConfig::from_env().unwrap();

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_with_override() {
        cleanup_env_vars();
        unsafe {
            std::env::set_var(API_BASE_URL_VAR, "http://10.0.0.5:8080/api/");
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.5:8080/api");

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_override() {
        cleanup_env_vars();
        unsafe {
            std::env::set_var(API_BASE_URL_VAR, "mailto:ops@example.com");
        }

        assert!(ClientConfig::from_env().is_err());

        cleanup_env_vars();
    }
}
