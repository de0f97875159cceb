//! Authenticated GET-only HTTP client
//!
//! Sends every request with the fixed base headers (JSON content type plus a
//! Basic authorization header computed once from the configured credentials)
//! merged with any per-call overrides, and hands the decoded JSON body back
//! unmodified. Interpreting the envelope is the caller's job.

use super::url::build_url;
use crate::auth::BasicCredentials;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error};

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, in emission order
    pub query: Vec<(String, String)>,
    /// Per-call headers; override base headers on key collision
    pub headers: HashMap<String, String>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter (order preserved)
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// GET-only HTTP client with fixed base headers
pub struct HttpClient {
    client: Client,
    base_url: String,
    // Computed once; never logged
    auth_header: String,
}

impl HttpClient {
    /// Create a client for the given origin and credentials
    pub fn new(base_url: impl Into<String>, credentials: &BasicCredentials) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            auth_header: credentials.header_value(),
        }
    }

    /// The configured origin
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Compose an absolute URL from a path (or absolute next-link) and query
    pub fn url(&self, path: &str, query: &[(String, String)]) -> String {
        build_url(&self.base_url, path, query)
    }

    /// Issue a GET request and decode the response body as JSON.
    ///
    /// `url` must already be absolute (see [`HttpClient::url`]). Per-call
    /// headers win over base headers on key collision. A non-success status
    /// fails with [`Error::HttpStatus`] carrying the status code; an
    /// undecodable body fails with [`Error::Decode`].
    pub async fn get_json(&self, url: &str, headers: &HashMap<String, String>) -> Result<Value> {
        debug!(url, "GET");

        // HeaderMap::insert replaces, so per-call entries override the base set
        let mut header_map = HeaderMap::new();
        header_map.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        header_map.insert(
            reqwest::header::AUTHORIZATION,
            HeaderValue::from_str(&self.auth_header)
                .map_err(|_| Error::config("credentials produce an invalid header value"))?,
        );
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| Error::config(format!("invalid header name: {key}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::config(format!("invalid value for header: {key}")))?;
            header_map.insert(name, value);
        }

        let response = self.client.get(url).headers(header_map).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(url, status = status.as_u16(), "request failed");
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("response body is not valid JSON: {e}")))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("auth_header", &"***")
            .finish_non_exhaustive()
    }
}
