use std::time::Duration;

use async_trait::async_trait;
use kcdb_core::{HttpMethod, QueryParams, Transport};
use kcdb_domain::constants::{BASE_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use kcdb_domain::{ClientConfig, KcdbError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::errors::InfraError;

/// HTTP client bound to one KCDB base URL.
///
/// Each call is a single attempt; failures are reported, never retried.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let builder = Self::builder()
            .base_url(&config.base_url)
            .timeout(config.timeout())
            .user_agent(&config.user_agent);
        if config.use_system_proxy {
            builder.build()
        } else {
            builder.no_proxy().build()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Ok(Url::parse(&joined).map_err(InfraError::from)?)
    }

    fn map_send_error(&self, err: reqwest::Error) -> KcdbError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => KcdbError::Connectivity(format!(
                "No reply from KCDB server after {} seconds",
                timeout.as_secs_f64()
            )),
            _ => InfraError::from(err).into(),
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &QueryParams,
        body: Option<&Value>,
    ) -> Result<Vec<u8>> {
        let url = self.url_for(path)?;
        let verb = match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = self.client.request(verb, url.clone());
        if !query.is_empty() {
            builder = builder.query(&query.pairs());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(%method, %url, "sending HTTP request");

        let response = builder.send().await.map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            self.map_send_error(err)
        })?;

        let status = response.status();
        let final_url = response.url().to_string();
        debug!(%method, url = %final_url, %status, "received HTTP response");

        let bytes = response.bytes().await.map_err(|err| self.map_send_error(err))?;

        if !status.is_success() {
            return Err(KcdbError::Http {
                status: status.as_u16(),
                url: final_url,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
    default_headers: Option<HeaderMap>,
    no_proxy: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Some(Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS)),
            user_agent: USER_AGENT.to_string(),
            default_headers: None,
            no_proxy: false,
        }
    }
}

impl HttpClientBuilder {
    /// `None` disables the request timeout.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Extra headers sent with every request, after `Accept`.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Ignore `HTTP(S)_PROXY` and connect directly.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(InfraError::from)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(extra) = self.default_headers {
            headers.extend(extra);
        }

        let mut builder =
            ReqwestClient::builder().user_agent(self.user_agent).default_headers(headers);

        if self.no_proxy {
            builder = builder.no_proxy();
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(InfraError::from)?;

        Ok(HttpClient { client, base_url, timeout: self.timeout })
    }
}
