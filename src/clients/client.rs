//! The client handle carried by every resource object.
//!
//! Objects only store a shared [`ClickupClient`]; requests are issued by a
//! separate transport layer that reads the client's configuration.

use std::sync::{Arc, OnceLock};

use crate::clients::ClientError;
use crate::config::ClickupConfig;

static DEFAULT_CLIENT: OnceLock<Arc<ClickupClient>> = OnceLock::new();

/// A configured handle to the ClickUp API.
///
/// # Thread Safety
///
/// `ClickupClient` is `Send + Sync`; objects share it through an [`Arc`].
///
/// # Example
///
/// ```rust
/// use clickup_objects::{ApiToken, ClickupClient, ClickupConfig};
///
/// let config = ClickupConfig::builder()
///     .api_token(ApiToken::new("pk_123").unwrap())
///     .build();
/// let client = ClickupClient::new(config);
///
/// assert!(client.is_authenticated());
/// assert_eq!(client.endpoint_url("task"), "https://api.clickup.com/api/v2/task");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickupClient {
    config: ClickupConfig,
}

// Verify ClickupClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClickupClient>();
};

impl ClickupClient {
    /// Creates a client from a configuration.
    #[must_use]
    pub const fn new(config: ClickupConfig) -> Self {
        Self { config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClickupConfig {
        &self.config
    }

    /// Returns `true` if the client carries an API token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.config.api_token().is_some()
    }

    /// Returns the absolute URL of an endpoint segment.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        self.config.base_url().join(endpoint)
    }

    /// Returns the process-wide default client.
    ///
    /// The first call builds it from the environment (see
    /// [`ClickupConfig::from_env`]); later calls return the same instance.
    /// An invalid environment falls back to the default configuration.
    #[must_use]
    pub fn default_client() -> Arc<Self> {
        Arc::clone(DEFAULT_CLIENT.get_or_init(|| {
            let config = ClickupConfig::from_env().unwrap_or_else(|e| {
                tracing::warn!("Ignoring ClickUp environment configuration: {}", e);
                ClickupConfig::default()
            });
            tracing::debug!(
                "Initialized default ClickUp client for {} (authenticated: {})",
                config.base_url(),
                config.api_token().is_some()
            );
            Arc::new(Self::new(config))
        }))
    }

    /// Installs the process-wide default client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::DefaultClientAlreadyInitialized`] if the default
    /// client was already installed or resolved.
    pub fn init_default(config: ClickupConfig) -> Result<Arc<Self>, ClientError> {
        let client = Arc::new(Self::new(config));
        DEFAULT_CLIENT
            .set(Arc::clone(&client))
            .map_err(|_| ClientError::DefaultClientAlreadyInitialized)?;
        tracing::debug!(
            "Installed default ClickUp client for {}",
            client.config.base_url()
        );
        Ok(client)
    }
}
