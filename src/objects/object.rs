//! The generic resource container.
//!
//! [`AbstractObject`] holds one API resource as an ordered key/value data
//! mapping plus a separate set of bookkeeping values ([`ObjectInternals`]):
//! the client, the raw response it was hydrated from, the response headers
//! and any attributes assigned through reserved keys.
//!
//! # Reserved keys
//!
//! Keys starting with [`RESERVED_PREFIX`] never become data fields. `set`
//! routes them to the object's attributes, so they do not show up in
//! `get`, `keys`, `len`, `contains_key` or any export.
//!
//! # Example
//!
//! ```rust
//! use clickup_objects::AbstractObject;
//! use serde_json::json;
//!
//! let mut object = AbstractObject::new();
//! object.set("id", "1").set("name", "Task A").set("_cache", true);
//!
//! assert_eq!(object.len(), 2);
//! assert!(!object.contains_key("_cache"));
//! assert_eq!(object.export_all(), json!({"id": "1", "name": "Task A"}));
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::clients::{ClickupClient, ResponseHeaders};

use super::errors::ObjectError;
use super::fields::{Fields, Iter, Keys};
use super::value::{export_record, FieldValue};

/// Prefix marking a key as object bookkeeping rather than resource data.
pub const RESERVED_PREFIX: char = '_';

/// Returns `true` if `key` is routed to object attributes by `set`.
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}

const BASE_KIND: &str = "AbstractObject";

/// Bookkeeping state of an object, kept apart from its data fields.
#[derive(Clone, Debug)]
pub struct ObjectInternals {
    client: Arc<ClickupClient>,
    raw_response: Option<Value>,
    headers: Option<ResponseHeaders>,
    attributes: Fields,
}

impl ObjectInternals {
    fn new(client: Arc<ClickupClient>) -> Self {
        Self {
            client,
            raw_response: None,
            headers: None,
            attributes: Fields::new(),
        }
    }

    /// Returns the client the object was created with.
    #[must_use]
    pub const fn client(&self) -> &Arc<ClickupClient> {
        &self.client
    }

    /// Returns the raw payload of the last hydration, verbatim.
    #[must_use]
    pub const fn raw_response(&self) -> Option<&Value> {
        self.raw_response.as_ref()
    }

    /// Returns the headers passed to the last hydration.
    #[must_use]
    pub const fn headers(&self) -> Option<&ResponseHeaders> {
        self.headers.as_ref()
    }

    /// Returns the values assigned through reserved keys.
    #[must_use]
    pub const fn attributes(&self) -> &Fields {
        &self.attributes
    }
}

/// A generic, mutable representation of one API resource.
///
/// Concrete resource types wrap an `AbstractObject` and implement
/// [`ClickupObject`](super::ClickupObject); the same value also appears,
/// type-erased, when one resource embeds another.
///
/// # Equality
///
/// Two objects are equal when their [`export_all`](Self::export_all)
/// results are equal. Kind, client and response metadata are ignored.
///
/// # Display
///
/// Renders `<Kind> ` followed by the export as JSON with sorted keys and
/// 4-space indentation. Meant for logs and debugging. Non-ASCII text is
/// written as raw UTF-8, not `\u`-escaped.
#[derive(Clone, Debug)]
pub struct AbstractObject {
    kind: &'static str,
    endpoint: Option<&'static str>,
    data: Fields,
    internals: ObjectInternals,
}

// Verify AbstractObject is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AbstractObject>();
};

impl AbstractObject {
    /// Creates an empty object bound to the process-wide default client.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(ClickupClient::default_client())
    }

    /// Creates an empty object bound to `client`.
    #[must_use]
    pub fn with_client(client: Arc<ClickupClient>) -> Self {
        Self {
            kind: BASE_KIND,
            endpoint: None,
            data: Fields::new(),
            internals: ObjectInternals::new(client),
        }
    }

    /// Creates an empty object of a concrete kind.
    pub(crate) fn bound(
        kind: &'static str,
        endpoint: &'static str,
        client: Arc<ClickupClient>,
    ) -> Self {
        Self {
            kind,
            endpoint: Some(endpoint),
            data: Fields::new(),
            internals: ObjectInternals::new(client),
        }
    }

    /// Returns the kind name (e.g., "Task"), or `"AbstractObject"` when the
    /// object is not bound to a concrete resource type.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the API path segment of this object's resource type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::NotImplemented`] when the object was created
    /// directly rather than through a [`ClickupObject`](super::ClickupObject)
    /// type. This is a usage error.
    pub fn endpoint(&self) -> Result<&'static str, ObjectError> {
        self.endpoint
            .ok_or(ObjectError::NotImplemented { kind: self.kind })
    }

    /// Returns the client the object was created with.
    #[must_use]
    pub const fn client(&self) -> &Arc<ClickupClient> {
        &self.internals.client
    }

    /// Returns the object's bookkeeping state.
    #[must_use]
    pub const fn internals(&self) -> &ObjectInternals {
        &self.internals
    }

    /// Returns the raw payload of the last hydration.
    #[must_use]
    pub const fn raw_response(&self) -> Option<&Value> {
        self.internals.raw_response()
    }

    /// Returns the headers passed to the last hydration.
    #[must_use]
    pub const fn headers(&self) -> Option<&ResponseHeaders> {
        self.internals.headers()
    }

    /// Returns an attribute previously assigned through a reserved key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&FieldValue> {
        self.internals.attributes.get(key)
    }

    /// Returns the value stored under a data key.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::KeyNotFound`] if `key` is not a data field.
    pub fn get(&self, key: &str) -> Result<&FieldValue, ObjectError> {
        self.data.get(key).ok_or_else(|| self.key_not_found(key))
    }

    /// Returns a mutable reference to the value stored under a data key.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::KeyNotFound`] if `key` is not a data field.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut FieldValue, ObjectError> {
        let kind = self.kind;
        self.data
            .get_mut(key)
            .ok_or_else(|| ObjectError::KeyNotFound {
                kind,
                key: key.to_string(),
            })
    }

    /// Assigns `value` to `key` and returns `self` for chaining.
    ///
    /// Reserved keys (see [`RESERVED_PREFIX`]) are stored as attributes
    /// instead of data fields.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        let key = key.into();
        if is_reserved_key(&key) {
            tracing::trace!("{} storing reserved key '{}' as an attribute", self.kind, key);
            self.internals.attributes.insert(key, value);
        } else {
            self.data.insert(key, value);
        }
        self
    }

    /// Removes a data key, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::KeyNotFound`] if `key` is not a data field.
    pub fn delete(&mut self, key: &str) -> Result<FieldValue, ObjectError> {
        match self.data.remove(key) {
            Some(value) => Ok(value),
            None => Err(self.key_not_found(key)),
        }
    }

    /// Iterates over data keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_> {
        self.data.keys()
    }

    /// Iterates over data entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        self.data.iter()
    }

    /// Returns the number of data fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the object has no data fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `key` is a data field. Attributes never match.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the data fields.
    #[must_use]
    pub const fn data(&self) -> &Fields {
        &self.data
    }

    /// Populates the object from a decoded response body.
    ///
    /// Every top-level pair of `raw` goes through [`set`](Self::set), so
    /// reserved keys become attributes here too. `raw` itself and `headers`
    /// are kept as bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::BadData`] if `raw` is not a JSON object. The
    /// object is left unchanged in that case.
    pub fn set_data(&mut self, raw: Value, headers: ResponseHeaders) -> Result<(), ObjectError> {
        let Value::Object(map) = &raw else {
            return Err(ObjectError::BadData {
                kind: self.kind,
                found: json_type_name(&raw),
            });
        };

        tracing::debug!("Hydrating {} with {} fields", self.kind, map.len());
        for (key, value) in map {
            self.set(key.clone(), value.clone());
        }

        self.internals.raw_response = Some(raw);
        self.internals.headers = Some(headers);
        Ok(())
    }

    /// Exports a value to plain JSON. See [`export_value`](super::export_value).
    #[must_use]
    pub fn export_value(value: &FieldValue) -> Value {
        super::value::export_value(value)
    }

    /// Exports all data fields to plain, null-pruned JSON.
    ///
    /// This is the canonical snapshot used for equality, display and
    /// serialization.
    #[must_use]
    pub fn export_all(&self) -> Value {
        Value::Object(export_record(&self.data))
    }

    fn key_not_found(&self, key: &str) -> ObjectError {
        ObjectError::KeyNotFound {
            kind: self.kind,
            key: key.to_string(),
        }
    }
}

impl Default for AbstractObject {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AbstractObject {
    fn eq(&self, other: &Self) -> bool {
        self.export_all() == other.export_all()
    }
}

/// An object only equals an embedded object with the same export.
impl PartialEq<FieldValue> for AbstractObject {
    fn eq(&self, other: &FieldValue) -> bool {
        other.as_object().is_some_and(|object| self == object)
    }
}

impl Serialize for AbstractObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.export_all().serialize(serializer)
    }
}

impl fmt::Display for AbstractObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> {}", self.kind, to_sorted_pretty_json(self.export_all())?)
    }
}

impl<'a> IntoIterator for &'a AbstractObject {
    type Item = (&'a str, &'a FieldValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn to_sorted_pretty_json(value: Value) -> Result<String, fmt::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    sort_keys(value)
        .serialize(&mut serializer)
        .map_err(|_| fmt::Error)?;
    String::from_utf8(buf).map_err(|_| fmt::Error)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, ClickupConfig};
    use serde_json::json;

    fn client() -> Arc<ClickupClient> {
        Arc::new(ClickupClient::new(ClickupConfig::default()))
    }

    fn object() -> AbstractObject {
        AbstractObject::with_client(client())
    }

    fn hydrated(raw: Value) -> AbstractObject {
        let mut object = object();
        object.set_data(raw, ResponseHeaders::new()).unwrap();
        object
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let mut object = object();
        object.set("name", "Task A");
        assert_eq!(object.get("name"), Ok(&FieldValue::from("Task A")));
    }

    #[test]
    fn test_get_missing_key_fails() {
        let error = object().get("missing").unwrap_err();
        assert_eq!(
            error,
            ObjectError::KeyNotFound {
                kind: "AbstractObject",
                key: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_set_is_chainable() {
        let mut object = object();
        object.set("a", 1).set("b", 2).set("c", 3);
        let keys: Vec<&str> = object.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_reserved_key_becomes_attribute() {
        let mut object = object();
        object.set("_json", "cached").set("id", "1");

        assert!(!object.contains_key("_json"));
        assert!(object.get("_json").is_err());
        assert_eq!(object.len(), 1);
        assert_eq!(object.attribute("_json"), Some(&FieldValue::from("cached")));
        assert_eq!(object.internals().attributes().len(), 1);
        assert_eq!(object.export_all(), json!({"id": "1"}));
    }

    #[test]
    fn test_delete_removes_and_returns_value() {
        let mut object = object();
        object.set("id", "1");

        assert_eq!(object.delete("id"), Ok(FieldValue::from("1")));
        assert!(object.is_empty());
        assert!(matches!(
            object.delete("id"),
            Err(ObjectError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_get_mut_edits_value() {
        let mut object = object();
        object.set("points", 1);
        *object.get_mut("points").unwrap() = FieldValue::from(5);
        assert_eq!(object.get("points").unwrap().as_i64(), Some(5));
        assert!(object.get_mut("nope").is_err());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let object = hydrated(json!({"id": "1", "name": "A"}));
        let first: Vec<&str> = object.keys().collect();
        let second: Vec<&str> = (&object).into_iter().map(|(k, _)| k).collect();
        assert_eq!(first, second);
        assert_eq!(object.iter().len(), 2);
    }

    #[test]
    fn test_set_data_routes_pairs_through_set() {
        let raw = json!({"id": "1", "_private": 9, "name": "Task A", "assignee": null});
        let mut headers = ResponseHeaders::new();
        headers.insert("X-Request-Id", "req-1");

        let mut object = object();
        object.set_data(raw.clone(), headers).unwrap();

        assert_eq!(object.len(), 3);
        assert!(object.get("assignee").unwrap().is_null());
        assert_eq!(object.attribute("_private").and_then(FieldValue::as_i64), Some(9));
        assert_eq!(object.raw_response(), Some(&raw));
        assert_eq!(object.headers().and_then(ResponseHeaders::request_id), Some("req-1"));
        assert_eq!(object.export_all(), json!({"id": "1", "name": "Task A"}));
    }

    #[test]
    fn test_set_data_rejects_non_objects_and_leaves_object_untouched() {
        let mut object = object();
        object.set("id", "1");

        for (raw, found) in [
            (json!([1, 2, 3]), "array"),
            (json!("task"), "string"),
            (json!(3), "number"),
            (Value::Null, "null"),
        ] {
            let error = object.set_data(raw, ResponseHeaders::new()).unwrap_err();
            assert_eq!(
                error,
                ObjectError::BadData {
                    kind: "AbstractObject",
                    found,
                }
            );
        }

        assert_eq!(object.len(), 1);
        assert!(object.raw_response().is_none());
        assert!(object.headers().is_none());
    }

    #[test]
    fn test_endpoint_on_base_object_is_not_implemented() {
        assert_eq!(
            object().endpoint(),
            Err(ObjectError::NotImplemented {
                kind: "AbstractObject"
            })
        );
    }

    #[test]
    fn test_bound_object_reports_kind_and_endpoint() {
        let object = AbstractObject::bound("Task", "task", client());
        assert_eq!(object.kind(), "Task");
        assert_eq!(object.endpoint(), Ok("task"));
    }

    #[test]
    fn test_equality_ignores_client_and_metadata() {
        let authed = Arc::new(ClickupClient::new(
            ClickupConfig::builder()
                .api_token(ApiToken::new("pk_1").unwrap())
                .build(),
        ));
        let mut left = AbstractObject::with_client(authed);
        left.set_data(json!({"id": "1"}), ResponseHeaders::new())
            .unwrap();
        let mut right = object();
        right.set("id", "1").set("gone", FieldValue::Null);

        assert_eq!(left, right);
        assert_eq!(right, left);
        assert_eq!(left, left.clone());
    }

    #[test]
    fn test_equality_against_non_objects_is_false() {
        let object = hydrated(json!({"id": "1"}));

        assert!(object != FieldValue::Null);
        assert!(object != FieldValue::from(json!({"id": "1"})));
        assert!(object == FieldValue::from(object.clone()));
    }

    #[test]
    fn test_display_sorts_keys_and_indents() {
        let object = hydrated(json!({"name": "A", "id": "1", "tags": [{"z": 1, "a": 2}]}));

        let expected = r#"<AbstractObject> {
    "id": "1",
    "name": "A",
    "tags": [
        {
            "a": 2,
            "z": 1
        }
    ]
}"#;
        assert_eq!(object.to_string(), expected);
    }

    #[test]
    fn test_display_writes_non_ascii_verbatim() {
        let object = hydrated(json!({"name": "Café ✓"}));
        assert_eq!(
            object.to_string(),
            "<AbstractObject> {\n    \"name\": \"Café ✓\"\n}"
        );
    }

    #[test]
    fn test_display_of_empty_object() {
        assert_eq!(object().to_string(), "<AbstractObject> {}");
    }

    #[test]
    fn test_export_keeps_insertion_order() {
        let object = hydrated(json!({"z": 1, "a": 2, "m": 3}));
        let exported = object.export_all();
        let keys: Vec<&String> = exported.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_serialize_emits_export() {
        let object = hydrated(json!({"id": "1", "x": null}));
        assert_eq!(serde_json::to_string(&object).unwrap(), r#"{"id":"1"}"#);
    }

    #[test]
    fn test_export_value_is_associated_helper() {
        let value = FieldValue::from(json!({"a": null}));
        assert_eq!(AbstractObject::export_value(&value), json!({}));
    }
}
