//! Gateway configuration.
//!
//! The upstream credential is the only piece of configuration. Browser builds
//! bake it in at compile time, the same way a bundler would inline it.

use crate::error::ConfigError;

/// Default upstream API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Build-time variable holding the upstream API key.
pub const API_KEY_VAR: &str = "MARQUEE_TMDB_API_KEY";
/// Optional build-time variable overriding the upstream base URL.
pub const BASE_URL_VAR: &str = "MARQUEE_TMDB_BASE_URL";

/// Connection settings for the upstream API.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    api_key: String,
    base_url: String,
}

impl GatewayConfig {
    /// Build a configuration against the default upstream.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the upstream base URL. Trailing slashes are trimmed.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Read the credential and optional base URL captured at build time.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingApiKey`] when no key was provided.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("MARQUEE_TMDB_API_KEY"),
            option_env!("MARQUEE_TMDB_BASE_URL"),
        )
    }

    /// Build a configuration from raw values, treating blanks as unset.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingApiKey`] when `api_key` is missing or blank.
    pub fn from_values(api_key: Option<&str>, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey {
                variable: API_KEY_VAR,
            })?;
        let config = Self::new(api_key);
        Ok(match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => config.with_base_url(url),
            None => config,
        })
    }

    /// Upstream API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Upstream base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
