//! Concrete resource types and the object factory.
//!
//! Each ClickUp resource kind (task, list, space, ...) is a thin wrapper
//! around an [`AbstractObject`] that implements [`ClickupObject`]. The trait
//! requires the kind's endpoint, so a resource type without one does not
//! compile. Mapping, export and hydration are inherited from the wrapped
//! object.
//!
//! # Declaring a resource
//!
//! The [`clickup_object!`](crate::clickup_object) macro generates the
//! wrapper, its trait impl and `Deref` to [`AbstractObject`]:
//!
//! ```rust
//! use clickup_objects::{clickup_object, create_object, ClickupObject, ResponseHeaders};
//! use serde_json::json;
//!
//! clickup_object! {
//!     /// A ClickUp task.
//!     pub struct Task => "task";
//! }
//!
//! let task: Task = create_object(
//!     json!({"id": "1", "name": "Task A", "assignee": null}),
//!     ResponseHeaders::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(Task::endpoint(), "task");
//! assert_eq!(task.get("name").unwrap().as_str(), Some("Task A"));
//! assert_eq!(task.export_all(), json!({"id": "1", "name": "Task A"}));
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ClickupClient, ResponseHeaders};

use super::errors::ObjectError;
use super::object::AbstractObject;
use super::value::FieldValue;

/// A concrete ClickUp resource type backed by an [`AbstractObject`].
///
/// Implementors supply their name, endpoint and access to the wrapped
/// object; construction and nesting come as default methods.
pub trait ClickupObject: Sized {
    /// The kind name (e.g., "Task"), used in errors and display output.
    const NAME: &'static str;

    /// The data keys this resource type declares, in declaration order.
    ///
    /// Informational only: objects accept any key regardless.
    const FIELDS: &'static [&'static str] = &[];

    /// Returns the API path segment of this resource type (e.g., "task").
    fn endpoint() -> &'static str;

    /// Wraps an object already bound to this kind.
    fn from_object(object: AbstractObject) -> Self;

    /// Returns the wrapped object.
    fn object(&self) -> &AbstractObject;

    /// Returns the wrapped object mutably.
    fn object_mut(&mut self) -> &mut AbstractObject;

    /// Unwraps the object.
    fn into_object(self) -> AbstractObject;

    /// Creates an empty resource bound to the process-wide default client.
    #[must_use]
    fn new() -> Self {
        Self::with_client(ClickupClient::default_client())
    }

    /// Creates an empty resource bound to `client`.
    #[must_use]
    fn with_client(client: Arc<ClickupClient>) -> Self {
        Self::from_object(AbstractObject::bound(Self::NAME, Self::endpoint(), client))
    }

    /// Converts the resource into a value that can be embedded in another
    /// object.
    #[must_use]
    fn into_value(self) -> FieldValue {
        FieldValue::Object(Box::new(self.into_object()))
    }
}

/// Builds a `T` from a decoded response body, using the default client.
///
/// This is the entry point for turning an API response into a typed object.
///
/// # Errors
///
/// Returns [`ObjectError::BadData`] if `raw` is not a JSON object.
pub fn create_object<T: ClickupObject>(
    raw: Value,
    headers: ResponseHeaders,
) -> Result<T, ObjectError> {
    create_object_with_client(raw, ClickupClient::default_client(), headers)
}

/// Builds a `T` from a decoded response body, bound to `client`.
///
/// # Errors
///
/// Returns [`ObjectError::BadData`] if `raw` is not a JSON object.
pub fn create_object_with_client<T: ClickupObject>(
    raw: Value,
    client: Arc<ClickupClient>,
    headers: ResponseHeaders,
) -> Result<T, ObjectError> {
    let mut object = T::with_client(client);
    object.object_mut().set_data(raw, headers)?;
    Ok(object)
}

/// Declares a resource type wrapping an [`AbstractObject`].
///
/// The generated struct implements [`ClickupObject`], `Deref`/`DerefMut` to
/// [`AbstractObject`], `Default`, `PartialEq`, `Display` and `Serialize`.
///
/// ```rust
/// use clickup_objects::{clickup_object, ClickupObject};
///
/// clickup_object! {
///     pub struct Space => "space";
/// }
///
/// let mut space = Space::new();
/// space.set("id", "5");
/// assert_eq!(space.kind(), "Space");
/// assert_eq!(space.endpoint(), Ok("space"));
/// ```
///
/// An optional brace list declares the resource's field names. Each one
/// becomes an associated `&'static str` constant spelled like the field,
/// and the whole list becomes [`ClickupObject::FIELDS`]. A field named like
/// an associated function of the type (`new`, `endpoint`, ...) shadows it.
///
/// ```rust
/// use clickup_objects::{clickup_object, ClickupObject};
///
/// clickup_object! {
///     pub struct Task => "task" { id, name, due_date }
/// }
///
/// let mut task = Task::new();
/// task.set(Task::name, "Task A");
/// assert_eq!(task.get(Task::name).unwrap().as_str(), Some("Task A"));
/// assert_eq!(Task::FIELDS, ["id", "name", "due_date"]);
/// ```
#[macro_export]
macro_rules! clickup_object {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $endpoint:literal;) => {
        $crate::clickup_object! {
            $(#[$meta])*
            $vis struct $name => $endpoint {}
        }
    };
    (
        $(#[$meta:meta])* $vis:vis struct $name:ident => $endpoint:literal
        { $($field:ident),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name($crate::AbstractObject);

        #[allow(non_upper_case_globals, dead_code)]
        impl $name {
            $(
                #[doc = concat!("The `", stringify!($field), "` data key.")]
                pub const $field: &'static str = stringify!($field);
            )*
        }

        impl $crate::ClickupObject for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            fn endpoint() -> &'static str {
                $endpoint
            }

            fn from_object(object: $crate::AbstractObject) -> Self {
                Self(object)
            }

            fn object(&self) -> &$crate::AbstractObject {
                &self.0
            }

            fn object_mut(&mut self) -> &mut $crate::AbstractObject {
                &mut self.0
            }

            fn into_object(self) -> $crate::AbstractObject {
                self.0
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                <Self as $crate::ClickupObject>::new()
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::AbstractObject;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S: $crate::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::serde::Serialize::serialize(&self.0, serializer)
            }
        }
    };
}
