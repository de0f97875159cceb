//! Client configuration
//!
//! An explicit configuration object constructed once and handed to the client
//! by the caller. There is no module-level state: credentials and the origin
//! live here and nowhere else.

use crate::error::{Error, Result};

/// Environment variable for the Confluence site origin
pub const ENV_BASE_URL: &str = "CONFLUENCE_BASE_URL";
/// Environment variable for the Atlassian account username (email)
pub const ENV_USERNAME: &str = "CONFLUENCE_USERNAME";
/// Environment variable for the Atlassian API token
pub const ENV_API_TOKEN: &str = "CONFLUENCE_API_TOKEN";
/// Optional override for the space listing endpoint path
pub const ENV_SPACES_PATH: &str = "CONFLUENCE_SPACES_PATH";
/// Optional override for the page listing endpoint path
pub const ENV_PAGES_PATH: &str = "CONFLUENCE_PAGES_PATH";

/// Default space listing endpoint (Confluence Cloud v2 API)
pub const DEFAULT_SPACES_PATH: &str = "/wiki/api/v2/spaces";
/// Default page listing endpoint (Confluence Cloud v2 API)
pub const DEFAULT_PAGES_PATH: &str = "/wiki/api/v2/pages";

/// Configuration for the Confluence client
#[derive(Clone)]
pub struct ClientConfig {
    /// Base origin prefixed to all relative paths, e.g. `https://acme.atlassian.net`
    pub base_url: String,
    /// Atlassian account username (email)
    pub username: String,
    /// Atlassian API token
    pub api_token: String,
    /// Relative path of the space listing endpoint
    pub spaces_path: String,
    /// Relative path of the page listing endpoint
    pub pages_path: String,
}

impl ClientConfig {
    /// Create a config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        Self::builder()
            .base_url(require_env(ENV_BASE_URL)?)
            .username(require_env(ENV_USERNAME)?)
            .api_token(require_env(ENV_API_TOKEN)?)
            .paths_from_env()
            .build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(Error::missing_field("username"));
        }
        if self.api_token.is_empty() {
            return Err(Error::missing_field("api_token"));
        }
        // Must be an absolute origin; a bare hostname is a config error
        let parsed = url::Url::parse(&self.base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http(s), got scheme '{}'",
                parsed.scheme()
            )));
        }
        Ok(())
    }
}

// Token must never leak through Debug output or logs
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("api_token", &"***")
            .field("spaces_path", &self.spaces_path)
            .field("pages_path", &self.pages_path)
            .finish()
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::missing_field(name)),
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    username: Option<String>,
    api_token: Option<String>,
    spaces_path: Option<String>,
    pages_path: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the base origin
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the account username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the API token
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Override the space listing endpoint path
    pub fn spaces_path(mut self, path: impl Into<String>) -> Self {
        self.spaces_path = Some(path.into());
        self
    }

    /// Override the page listing endpoint path
    pub fn pages_path(mut self, path: impl Into<String>) -> Self {
        self.pages_path = Some(path.into());
        self
    }

    /// Apply endpoint path overrides from the environment, when set.
    ///
    /// The overrides are optional regardless of how the credentials were
    /// supplied, so this applies whether the rest of the config came from
    /// the environment or from flags.
    #[must_use]
    pub fn paths_from_env(mut self) -> Self {
        if let Ok(path) = std::env::var(ENV_SPACES_PATH) {
            self.spaces_path = Some(path);
        }
        if let Ok(path) = std::env::var(ENV_PAGES_PATH) {
            self.pages_path = Some(path);
        }
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<ClientConfig> {
        let config = ClientConfig {
            base_url: self.base_url.ok_or_else(|| Error::missing_field("base_url"))?,
            username: self.username.ok_or_else(|| Error::missing_field("username"))?,
            api_token: self
                .api_token
                .ok_or_else(|| Error::missing_field("api_token"))?,
            spaces_path: self
                .spaces_path
                .unwrap_or_else(|| DEFAULT_SPACES_PATH.to_string()),
            pages_path: self
                .pages_path
                .unwrap_or_else(|| DEFAULT_PAGES_PATH.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Serializes tests that mutate the process environment.
///
/// Cargo runs tests on multiple threads in one process; any test touching
/// the `CONFLUENCE_*` variables must hold this lock.
#[cfg(test)]
pub(crate) fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    use once_cell::sync::Lazy;
    static LOCK: Lazy<std::sync::Mutex<()>> = Lazy::new(std::sync::Mutex::default);
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
