//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_PAGE_SIZE, USER_AGENT};
use crate::errors::{KcdbError, Result};

/// Client configuration
///
/// Every field has a default, so an empty JSON object or TOML document is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to.
    pub base_url: String,
    /// Request timeout in seconds. `None` (or a negative value) disables it.
    pub timeout_secs: Option<f64>,
    pub user_agent: String,
    /// Largest page size a search may request.
    pub max_page_size: u32,
    /// Route requests through the proxy named by `HTTP(S)_PROXY`.
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            max_page_size: MAX_PAGE_SIZE,
            use_system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// The request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs >= 0.0)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.use_system_proxy = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout_secs = timeout.map(|t| t.as_secs_f64());
        self
    }

    /// Check the values that the type system cannot.
    ///
    /// # Errors
    /// Returns `KcdbError::Config` for an empty base URL, a base URL without
    /// an http(s) scheme, a timeout that is not a representable duration, or
    /// a page ceiling outside `[1, MAX_PAGE_SIZE]`.
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(KcdbError::Config("base_url must not be empty".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(KcdbError::Config(format!(
                "base_url must use http or https: {}",
                self.base_url
            )));
        }
        if let Some(secs) = self.timeout_secs.filter(|secs| secs.is_nan() || *secs >= 0.0) {
            if Duration::try_from_secs_f64(secs).is_err() {
                return Err(KcdbError::Config(format!(
                    "timeout_secs is not a valid duration: {secs}"
                )));
            }
        }
        if self.max_page_size < 1 || self.max_page_size > MAX_PAGE_SIZE {
            return Err(KcdbError::Config(format!(
                "max_page_size must be in the range [1, {}], got {}",
                MAX_PAGE_SIZE, self.max_page_size
            )));
        }
        Ok(())
    }
}
