//! Configuration types for the ClickUp SDK.
//!
//! # Overview
//!
//! - [`ClickupConfig`]: settings shared by every object created through a client
//! - [`ClickupConfigBuilder`]: a builder for constructing [`ClickupConfig`] instances
//! - [`ApiToken`]: a validated API token with masked debug output
//! - [`BaseUrl`]: a validated API root URL
//!
//! # Example
//!
//! ```rust
//! use clickup_objects::{ApiToken, BaseUrl, ClickupConfig};
//!
//! let config = ClickupConfig::builder()
//!     .api_token(ApiToken::new("pk_123").unwrap())
//!     .base_url(BaseUrl::new("https://api.clickup.com/api/v2").unwrap())
//!     .build();
//!
//! assert!(config.api_token().is_some());
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use crate::error::ConfigError;

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "CLICKUP_API_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "CLICKUP_BASE_URL";

/// Configuration for a [`ClickupClient`](crate::ClickupClient).
///
/// A configuration without a token is valid; it describes an
/// unauthenticated client, which is what the process default falls back to
/// when nothing is configured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickupConfig {
    api_token: Option<ApiToken>,
    base_url: BaseUrl,
}

impl ClickupConfig {
    /// Creates a new builder for constructing a `ClickupConfig`.
    #[must_use]
    pub fn builder() -> ClickupConfigBuilder {
        ClickupConfigBuilder::new()
    }

    /// Builds a configuration from `CLICKUP_API_TOKEN` and `CLICKUP_BASE_URL`.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironment`] if a variable is set but
    /// does not hold a valid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// This is the testable core of [`ClickupConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironment`] if a variable is present
    /// but invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clickup_objects::ClickupConfig;
    ///
    /// let config = ClickupConfig::from_lookup(|name| match name {
    ///     "CLICKUP_API_TOKEN" => Some("pk_1".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.api_token().unwrap().as_ref(), "pk_1");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(token) = lookup(TOKEN_ENV_VAR) {
            let token = ApiToken::new(token).map_err(|e| ConfigError::InvalidEnvironment {
                name: TOKEN_ENV_VAR,
                reason: e.to_string(),
            })?;
            builder = builder.api_token(token);
        }

        if let Some(url) = lookup(BASE_URL_ENV_VAR) {
            let url = BaseUrl::new(url).map_err(|e| ConfigError::InvalidEnvironment {
                name: BASE_URL_ENV_VAR,
                reason: e.to_string(),
            })?;
            builder = builder.base_url(url);
        }

        Ok(builder.build())
    }

    /// Returns the API token, if configured.
    #[must_use]
    pub const fn api_token(&self) -> Option<&ApiToken> {
        self.api_token.as_ref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

// Verify ClickupConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClickupConfig>();
};

/// Builder for constructing [`ClickupConfig`] instances.
///
/// Every field is optional:
///
/// - `api_token`: `None` (unauthenticated)
/// - `base_url`: [`BaseUrl::CLICKUP_V2`]
#[derive(Debug, Default)]
pub struct ClickupConfigBuilder {
    api_token: Option<ApiToken>,
    base_url: Option<BaseUrl>,
}

impl ClickupConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token.
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Builds the [`ClickupConfig`].
    #[must_use]
    pub fn build(self) -> ClickupConfig {
        ClickupConfig {
            api_token: self.api_token,
            base_url: self.base_url.unwrap_or_default(),
        }
    }
}
