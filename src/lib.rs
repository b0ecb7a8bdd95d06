//! # ClickUp resource objects
//!
//! The resource-object core of a Rust ClickUp SDK: a generic, dictionary-like
//! container for API resources with JSON hydration, null-pruning export and a
//! typed object factory.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`AbstractObject`], the ordered key/value container behind every resource
//! - The [`ClickupObject`] trait and the [`clickup_object!`] macro for
//!   declaring concrete resource types with their endpoints
//! - [`create_object`], which hydrates a typed object from a response body and
//!   its [`ResponseHeaders`]
//! - Recursive export of nested resource graphs into plain JSON
//! - [`ClickupClient`] with a lazily initialized process-wide default, and
//!   its [`ClickupConfig`]
//!
//! ## Quick Start
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
//! assert_eq!(task.export_all(), json!({"id": "1", "name": "Task A"}));
//! println!("{task}");
//! ```
//!
//! ## Configuring the default client
//!
//! Objects created without an explicit client share the process-wide
//! default. It is built from `CLICKUP_API_TOKEN` / `CLICKUP_BASE_URL` on first
//! use, or installed explicitly beforehand:
//!
//! ```rust,no_run
//! use clickup_objects::{ApiToken, ClickupClient, ClickupConfig};
//!
//! let config = ClickupConfig::builder()
//!     .api_token(ApiToken::new("pk_123").unwrap())
//!     .build();
//! ClickupClient::init_default(config).unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No I/O**: objects hold a client but never call it
//! - **Export is canonical**: equality, display and serialization all go
//!   through the null-pruned export
//! - **Endpoints at compile time**: a resource type without an endpoint does
//!   not compile
//! - **Thread-safe**: all types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod objects;

#[doc(hidden)]
pub use serde;

pub use clients::{ClickupClient, ClientError, RateLimit, ResponseHeaders};
pub use config::{ApiToken, BaseUrl, ClickupConfig, ClickupConfigBuilder};
pub use error::ConfigError;

pub use objects::{
    create_object, create_object_with_client, export_value, is_reserved_key, AbstractObject,
    ClickupObject, FieldValue, Fields, ObjectError, ObjectInternals, RESERVED_PREFIX,
};
