//! Basic auth credentials

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Account credentials for HTTP Basic authentication
#[derive(Clone)]
pub struct BasicCredentials {
    username: String,
    token: String,
}

impl BasicCredentials {
    /// Create credentials from an account username and API token
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// The account username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Compute the `Authorization` header value: `Basic base64(username:token)`
    pub fn header_value(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.token));
        format!("Basic {encoded}")
    }
}

// The token must never appear in Debug output or logs
impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("token", &"***")
            .finish()
    }
}
