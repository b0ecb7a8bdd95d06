//! Error types for resource-object operations.
//!
//! Every variant signals a data or usage defect on the caller's side; none
//! of them is transient, so nothing here is retried.
//!
//! # Example
//!
//! ```rust
//! use clickup_objects::{AbstractObject, ObjectError};
//!
//! let object = AbstractObject::new();
//! match object.get("id") {
//!     Err(ObjectError::KeyNotFound { key, .. }) => assert_eq!(key, "id"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Error type for resource-object operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// A data key was read or deleted but is not present.
    #[error("{kind} has no data field '{key}'")]
    KeyNotFound {
        /// The kind of object that was accessed (e.g., "Task").
        kind: &'static str,
        /// The missing key.
        key: String,
    },

    /// Hydration input was not a JSON object.
    ///
    /// The object is left untouched when this is returned.
    #[error("Bad data to set {kind} object data: expected a JSON object, found {found}")]
    BadData {
        /// The kind of object being hydrated.
        kind: &'static str,
        /// The JSON type that was supplied instead (e.g., "array").
        found: &'static str,
    },

    /// The endpoint was requested from an object with no concrete kind.
    ///
    /// This is a usage error: only types implementing
    /// [`ClickupObject`](super::ClickupObject) declare an endpoint.
    #[error("{kind} must implement endpoint")]
    NotImplemented {
        /// The kind of object the endpoint was requested from.
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_message_names_kind_and_key() {
        let error = ObjectError::KeyNotFound {
            kind: "Task",
            key: "missing".to_string(),
        };
        assert_eq!(error.to_string(), "Task has no data field 'missing'");
    }

    #[test]
    fn test_bad_data_message_names_found_type() {
        let error = ObjectError::BadData {
            kind: "Task",
            found: "array",
        };
        let message = error.to_string();
        assert!(message.contains("Bad data"));
        assert!(message.contains("found array"));
    }

    #[test]
    fn test_not_implemented_message() {
        let error = ObjectError::NotImplemented {
            kind: "AbstractObject",
        };
        assert_eq!(error.to_string(), "AbstractObject must implement endpoint");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ObjectError::NotImplemented { kind: "X" };
        let _: &dyn std::error::Error = &error;
    }
}
