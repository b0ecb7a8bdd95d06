//! Error types for the client collaborator.

use thiserror::Error;

/// Errors raised while setting up a [`ClickupClient`](super::ClickupClient).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The process-wide default client was already created.
    ///
    /// [`ClickupClient::init_default`](super::ClickupClient::init_default)
    /// must run before anything resolves the default client.
    #[error("The default ClickUp client is already initialized; call init_default before creating any objects.")]
    DefaultClientAlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_initialized_message_is_actionable() {
        let message = ClientError::DefaultClientAlreadyInitialized.to_string();
        assert!(message.contains("already initialized"));
        assert!(message.contains("init_default"));
    }

    #[test]
    fn test_lifecycle_is_the_only_client_failure() {
        let error = ClientError::DefaultClientAlreadyInitialized;
        match error {
            ClientError::DefaultClientAlreadyInitialized => {}
        }
    }
}
