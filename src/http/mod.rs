//! HTTP client module
//!
//! GET-only client over reqwest with a fixed set of base headers
//! (JSON content type + Basic authorization) merged with per-call overrides.
//!
//! There is deliberately no retry, backoff, rate limiting, or timeout layer:
//! a failed request surfaces immediately as an error and the caller decides
//! what to do with the in-flight collection.

mod client;
mod url;

pub use client::{HttpClient, RequestConfig};
pub use url::build_url;

#[cfg(test)]
mod tests;
