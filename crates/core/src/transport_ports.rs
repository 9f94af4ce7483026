//! Transport port
//!
//! The contract every HTTP adapter fulfils: send one request relative to the
//! KCDB base URL and hand back the raw body of a 2xx response.

use std::fmt;

use async_trait::async_trait;
use kcdb_domain::Result;
use serde_json::Value;

/// HTTP verbs used by the KCDB API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Int(i64),
    Text(String),
    /// Serialized as one `key=value` pair per element.
    List(Vec<String>),
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into `key=value` pairs, repeating the key for list values.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                QueryValue::Int(n) => pairs.push((key.clone(), n.to_string())),
                QueryValue::Text(text) => pairs.push((key.clone(), text.clone())),
                QueryValue::List(items) => {
                    pairs.extend(items.iter().map(|item| (key.clone(), item.clone())));
                }
            }
        }
        pairs
    }
}

/// Trait for the HTTP transport used by the facades
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request to `path` (relative to the base URL).
    ///
    /// # Errors
    /// `KcdbError::Connectivity` when the server cannot be reached and
    /// `KcdbError::Http` for any non-2xx status. No retry is attempted.
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &QueryParams,
        body: Option<&Value>,
    ) -> Result<Vec<u8>>;

    /// Convenience wrapper for a GET without a body.
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Vec<u8>> {
        self.request(HttpMethod::Get, path, query, None).await
    }

    /// Convenience wrapper for a POST with a JSON body.
    async fn post(&self, path: &str, body: &Value) -> Result<Vec<u8>> {
        self.request(HttpMethod::Post, path, &QueryParams::new(), Some(body)).await
    }

    /// The request timeout the transport enforces, if any.
    fn timeout(&self) -> Option<std::time::Duration>;
}
