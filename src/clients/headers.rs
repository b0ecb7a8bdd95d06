//! Response metadata retained alongside hydrated objects.
//!
//! The transport layer hands [`ResponseHeaders`] to the object factory
//! together with the decoded body. Objects keep them for later inspection;
//! nothing in this crate performs the request that produced them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Rate limit information parsed from ClickUp's `X-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use clickup_objects::RateLimit;
///
/// let limit = RateLimit::parse("100", "42", "1700000000").unwrap();
/// assert_eq!(limit.limit, 100);
/// assert_eq!(limit.remaining, 42);
/// assert_eq!(limit.reset_at.timestamp(), 1_700_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// When the current window resets.
    pub reset_at: DateTime<Utc>,
}

impl RateLimit {
    /// Parses the three header values.
    ///
    /// `reset` is a unix timestamp in seconds.
    ///
    /// # Returns
    ///
    /// `Some(RateLimit)` if every value parses, `None` otherwise.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str, reset: &str) -> Option<Self> {
        let limit = limit.trim().parse().ok()?;
        let remaining = remaining.trim().parse().ok()?;
        let reset_at = DateTime::from_timestamp(reset.trim().parse().ok()?, 0)?;

        Some(Self {
            limit,
            remaining,
            reset_at,
        })
    }

    /// Returns `true` when no requests remain in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Headers of the response an object was hydrated from.
///
/// Names are stored lower-cased; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use clickup_objects::ResponseHeaders;
///
/// let headers: ResponseHeaders = [("X-Request-Id", "req-1")].into_iter().collect();
/// assert_eq!(headers.get("x-request-id"), Some("req-1"));
/// assert_eq!(headers.request_id(), Some("req-1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    headers: HashMap<String, Vec<String>>,
}

impl ResponseHeaders {
    /// Creates an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `name`.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// Returns the first value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns every value of `name`.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }

    /// Returns the number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if no headers are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterates over header names and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.headers
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.get("x-request-id")
    }

    /// Returns the rate limit state reported by the response, if complete.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        RateLimit::parse(
            self.get("x-ratelimit-limit")?,
            self.get("x-ratelimit-remaining")?,
            self.get("x-ratelimit-reset")?,
        )
    }
}

impl From<HashMap<String, Vec<String>>> for ResponseHeaders {
    fn from(raw: HashMap<String, Vec<String>>) -> Self {
        let mut headers = Self::new();
        for (name, values) in raw {
            for value in values {
                headers.insert(&name, value);
            }
        }
        headers
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ResponseHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}
