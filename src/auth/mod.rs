//! Authentication module
//!
//! Confluence Cloud uses HTTP Basic auth with an account email and API token.
//! The header value is computed once at client construction and reused for
//! every request; there is no refresh or rotation.

mod credentials;

pub use credentials::BasicCredentials;
