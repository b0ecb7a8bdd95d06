//! Values stored in resource objects and their export to plain JSON.
//!
//! A [`FieldValue`] is a JSON primitive, a nested record or sequence, or a
//! whole embedded [`AbstractObject`]. Export turns any of them into a plain
//! [`serde_json::Value`]:
//!
//! - embedded objects are replaced by their own full export
//! - records drop keys whose value is null, at every depth
//! - sequences keep null elements
//!
//! ```rust
//! use clickup_objects::{export_value, FieldValue};
//! use serde_json::json;
//!
//! let value = FieldValue::from(json!({"a": null, "b": [1, null]}));
//! assert_eq!(export_value(&value), json!({"b": [1, null]}));
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use super::fields::Fields;
use super::object::AbstractObject;

/// A value held under a data key.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    /// The absent value. Dropped from records on export.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A JSON number.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered sequence.
    Array(Vec<FieldValue>),
    /// A nested key/value record.
    Record(Fields),
    /// An embedded resource object (e.g., the list a task belongs to).
    Object(Box<AbstractObject>),
}

impl FieldValue {
    /// Returns `true` for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number as `i64`, if it is one and fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the number as `u64`, if it is one and fits.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Returns the number as `f64`, if it is one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is a sequence.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the record, if this is one.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Fields> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the embedded object, if this is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&AbstractObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the embedded object mutably, if this is one.
    pub fn as_object_mut(&mut self) -> Option<&mut AbstractObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Exports this value to plain JSON. See [`export_value`].
    #[must_use]
    pub fn export(&self) -> Value {
        export_value(self)
    }
}

/// Recursively converts a value into plain, null-pruned JSON.
///
/// Embedded objects are exported depth-first through
/// [`AbstractObject::export_all`]. Record keys whose value is null are
/// dropped; null sequence elements are kept.
#[must_use]
pub fn export_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => Value::Null,
        FieldValue::Bool(b) => Value::Bool(*b),
        FieldValue::Number(n) => Value::Number(n.clone()),
        FieldValue::String(s) => Value::String(s.clone()),
        FieldValue::Array(items) => Value::Array(items.iter().map(export_value).collect()),
        FieldValue::Record(fields) => Value::Object(export_record(fields)),
        FieldValue::Object(object) => object.export_all(),
    }
}

pub(crate) fn export_record(fields: &Fields) -> Map<String, Value> {
    fields
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.to_string(), export_value(value)))
        .collect()
}

/// Serializes the exported form.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        export_value(self).serialize(serializer)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Record(map.into_iter().collect()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Number> for FieldValue {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

/// Non-finite floats have no JSON form and become [`FieldValue::Null`].
impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<Fields> for FieldValue {
    fn from(fields: Fields) -> Self {
        Self::Record(fields)
    }
}

impl From<AbstractObject> for FieldValue {
    fn from(object: AbstractObject) -> Self {
        Self::Object(Box::new(object))
    }
}

impl<T: Into<Self>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ClickupClient;
    use crate::config::ClickupConfig;
    use serde_json::json;
    use std::sync::Arc;

    fn client() -> Arc<ClickupClient> {
        Arc::new(ClickupClient::new(ClickupConfig::default()))
    }

    #[test]
    fn test_primitives_pass_through() {
        assert_eq!(export_value(&FieldValue::from(true)), json!(true));
        assert_eq!(export_value(&FieldValue::from(7)), json!(7));
        assert_eq!(export_value(&FieldValue::from(1.5)), json!(1.5));
        assert_eq!(export_value(&FieldValue::from("x")), json!("x"));
        assert_eq!(export_value(&FieldValue::Null), Value::Null);
    }

    #[test]
    fn test_record_drops_null_keys_at_every_depth() {
        let value = FieldValue::from(json!({
            "id": "1",
            "assignee": null,
            "meta": {"color": null, "tags": {"x": null, "y": 1}}
        }));

        assert_eq!(
            export_value(&value),
            json!({"id": "1", "meta": {"tags": {"y": 1}}})
        );
    }

    #[test]
    fn test_sequence_keeps_null_elements() {
        // Null elements survive while records inside the sequence are pruned.
        let value = FieldValue::from(json!([null, {"a": null, "b": 2}, 3]));
        assert_eq!(export_value(&value), json!([null, {"b": 2}, 3]));
    }

    #[test]
    fn test_embedded_object_exports_depth_first() {
        let mut space = AbstractObject::with_client(client());
        space.set("id", "5").set("private", FieldValue::Null);

        let mut list = AbstractObject::with_client(client());
        list.set("id", "9").set("space", space);

        let value = FieldValue::from(vec![FieldValue::from(list)]);
        assert_eq!(
            export_value(&value),
            json!([{"id": "9", "space": {"id": "5"}}])
        );
    }

    #[test]
    fn test_record_holding_empty_object_is_kept() {
        let value = FieldValue::from(Fields::from_iter([(
            "list",
            FieldValue::from(AbstractObject::with_client(client())),
        )]));
        assert_eq!(export_value(&value), json!({"list": {}}));
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        assert!(FieldValue::from(f64::NAN).is_null());
        assert!(FieldValue::from(f64::INFINITY).is_null());
    }

    #[test]
    fn test_option_and_vec_conversions() {
        assert!(FieldValue::from(None::<&str>).is_null());
        assert_eq!(FieldValue::from(Some("a")), FieldValue::from("a"));
        assert_eq!(
            export_value(&FieldValue::from(vec![1, 2, 3])),
            json!([1, 2, 3])
        );
    }

    #[test]
    fn test_accessors() {
        let value = FieldValue::from(json!({"n": 42, "s": "hi", "b": false, "a": [1]}));
        let record = value.as_record().unwrap();

        assert_eq!(record.get("n").and_then(FieldValue::as_u64), Some(42));
        assert_eq!(record.get("n").and_then(FieldValue::as_f64), Some(42.0));
        assert_eq!(record.get("s").and_then(FieldValue::as_str), Some("hi"));
        assert_eq!(record.get("b").and_then(FieldValue::as_bool), Some(false));
        assert_eq!(record.get("a").and_then(FieldValue::as_array).map(<[_]>::len), Some(1));
        assert!(value.as_object().is_none());
        assert!(value.as_str().is_none());
    }

    #[test]
    fn test_serialize_uses_export() {
        let value = FieldValue::from(json!({"keep": 1, "drop": null}));
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"keep":1}"#);
    }
}
