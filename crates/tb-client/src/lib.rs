//! # tb-client
//!
//! HTTP client for the typebook schema registry.
//!
//! One [`RegistryClient`] exposes every registry operation, grouped by
//! resource in separate modules:
//! - [`subject`]: create, get, list, update and delete subjects
//! - [`config`]: whole-config and per-property settings of a subject
//! - [`schema`]: registration, lookup, versioned fetches and compatibility
//!   checks
//!
//! Every operation returns either its typed result or a non-empty
//! [`RegistryError`]. There is no caching, retrying or connection policy here;
//! timeouts and pooling belong to the wrapped [`reqwest::Client`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), tb_client::RegistryError> {
//! use tb_client::RegistryClient;
//! use tb_core::VersionSelector;
//!
//! let client = RegistryClient::new("127.0.0.1:8888")?;
//! let selector = VersionSelector::parse(Some("v1"))?;
//! let schema = client.get_schema("person", &selector).await?;
//! println!("{} {}", schema.version, schema.definition);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod schema;
pub mod subject;

mod error;
mod http;

pub use error::{ClientError, RegistryError, ServerError};

use std::time::Duration;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("typebook-rs/", env!("CARGO_PKG_VERSION"));

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one typebook server.
///
/// Cloning is cheap; the clone shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client for `endpoint` with default transport settings.
    ///
    /// `endpoint` may be `host:port` (addressed over plain HTTP) or a full
    /// `http://` / `https://` URL.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the underlying `reqwest::Client` fails to
    /// build.
    pub fn new(endpoint: &str) -> Result<Self, RegistryError> {
        Self::builder(endpoint).build()
    }

    /// Start configuring a client for `endpoint`.
    #[must_use]
    pub fn builder(endpoint: &str) -> ClientBuilder {
        ClientBuilder {
            endpoint: endpoint.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Wrap a caller-supplied transport.
    #[must_use]
    pub fn with_http_client(endpoint: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: normalize_endpoint(endpoint),
        }
    }

    /// Base URL every request path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(method = "GET", path, "registry request");
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(method = "POST", path, "registry request");
        self.http.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(method = "PUT", path, "registry request");
        self.http.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(method = "DELETE", path, "registry request");
        self.http.delete(self.url(path))
    }
}

/// Builder for [`RegistryClient`] transport settings.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientBuilder {
    /// Overall per-request timeout. Unset means the call may block until the
    /// server answers.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// # Errors
    ///
    /// Returns [`RegistryError`] if the underlying `reqwest::Client` fails to
    /// build.
    pub fn build(self) -> Result<RegistryClient, RegistryError> {
        let mut http = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        Ok(RegistryClient::with_http_client(&self.endpoint, http.build()?))
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Percent-encode one caller-supplied path segment.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
