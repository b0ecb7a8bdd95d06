//! Client collaborator types.
//!
//! Resource objects hold a shared [`ClickupClient`] and the
//! [`ResponseHeaders`] of the response they were hydrated from. The HTTP
//! transport that uses them lives outside this crate.
//!
//! # Overview
//!
//! - [`ClickupClient`]: configured client handle and the process-wide default
//! - [`ResponseHeaders`]: case-insensitive response header map
//! - [`RateLimit`]: parsed `X-RateLimit-*` headers
//! - [`ClientError`]: client setup errors

mod client;
mod errors;
mod headers;

pub use client::ClickupClient;
pub use errors::ClientError;
pub use headers::{RateLimit, ResponseHeaders};
