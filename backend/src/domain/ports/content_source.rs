//! Driven port for running read-only queries against the content store.
//!
//! The domain owns the query shape (GROQ text plus named parameters) and
//! receives loosely-typed JSON back; shaping into typed documents happens in
//! the content service so adapters stay transport-only.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

/// One read-only structured query against the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    /// Short label used in logs and test doubles.
    pub name: &'static str,
    /// GROQ filter, projection and ordering.
    pub groq: &'static str,
    /// Named string parameters bound as `$name` in the query.
    pub params: Vec<(&'static str, String)>,
}

impl ContentQuery {
    /// Build a parameterless query.
    pub const fn new(name: &'static str, groq: &'static str) -> Self {
        Self {
            name,
            groq,
            params: Vec::new(),
        }
    }

    /// Bind a named string parameter.
    ///
    /// # Examples
    /// ```
    /// use coaching_site::domain::ports::ContentQuery;
    ///
    /// let query = ContentQuery::new("blog_post", "*[slug.current == $slug][0]")
    ///     .with_param("slug", "first-post");
    /// assert_eq!(query.param("slug"), Some("first-post"));
    /// ```
    #[must_use]
    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Return the bound value for `key`, if any.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }
}

define_port_error! {
    /// Errors surfaced while querying the content store.
    pub enum ContentSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "content store transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "content store timeout: {message}",
        /// The store rate-limited the request.
        RateLimited { message: String } =>
            "content store rate limited request: {message}",
        /// The response could not be decoded into the expected shape.
        Decode { message: String } =>
            "content store response decode failed: {message}",
        /// The store rejected the query itself.
        InvalidRequest { message: String } =>
            "content store rejected query: {message}",
    }
}

/// Port for executing content queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run `query` and return the raw `result` value.
    ///
    /// A query whose filter matches nothing yields `Value::Null` for `[0]`
    /// projections and an empty array for list projections.
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, ContentSourceError>;
}

/// Fixture implementation answering every query with `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureContentSource;

#[async_trait]
impl ContentSource for FixtureContentSource {
    async fn fetch(&self, _query: &ContentQuery) -> Result<Value, ContentSourceError> {
        Ok(Value::Null)
    }
}
