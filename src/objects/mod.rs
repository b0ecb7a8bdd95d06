//! Resource objects for the ClickUp API.
//!
//! This module provides the generic container every ClickUp resource is
//! built on:
//!
//! - **[`AbstractObject`]**: an ordered key/value container holding one
//!   resource, its client and the response it was hydrated from
//! - **[`ClickupObject`] trait**: implemented by concrete resource types,
//!   which must declare their endpoint
//! - **[`create_object`]**: the factory turning a response body into a
//!   typed object
//! - **[`FieldValue`]** and **[`Fields`]**: the values and ordered records
//!   stored in an object
//! - **Export**: [`export_value`] and [`AbstractObject::export_all`] turn an
//!   object graph into plain, null-pruned JSON
//! - **[`ObjectError`]**: errors for missing keys, bad hydration input and
//!   missing endpoints
//!
//! # Example
//!
//! ```rust
//! use clickup_objects::{clickup_object, create_object, ClickupObject, ResponseHeaders};
//! use serde_json::json;
//!
//! clickup_object! {
//!     pub struct Task => "task";
//! }
//! clickup_object! {
//!     pub struct List => "list";
//! }
//!
//! let mut task: Task = create_object(json!({"id": "1"}), ResponseHeaders::new()).unwrap();
//! let list: List = create_object(json!({"id": "9", "extra": null}), ResponseHeaders::new()).unwrap();
//!
//! task.set("list", list.into_value());
//! assert_eq!(task.export_all(), json!({"id": "1", "list": {"id": "9"}}));
//! ```

mod errors;
mod fields;
mod object;
mod resource;
mod value;

pub use errors::ObjectError;
pub use fields::{Fields, Iter, Keys};
pub use object::{is_reserved_key, AbstractObject, ObjectInternals, RESERVED_PREFIX};
pub use resource::{create_object, create_object_with_client, ClickupObject};
pub use value::{export_value, FieldValue};
