//! # confluence-harvest
//!
//! Async client for the Confluence Cloud REST API with transparent
//! next-link pagination.
//!
//! The core is the paginated collector: given a starting URL it follows the
//! opaque `_links.next` pointer from each response envelope, accumulating
//! every page's `results` into one ordered collection, and surfaces a single
//! typed error when any page fails. On top of that sit two thin projections
//! (spaces and pages) and a small CLI.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use confluence_harvest::{ClientConfig, Confluence, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = Confluence::new(&config)?;
//!
//!     for space in client.get_all_spaces().await? {
//!         println!("{:?} {:?}", space.key, space.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller → Confluence facade → resource mappers
//!                 │
//!          paginated Collector ──loop──▶ HttpClient ──▶ build_url ──▶ network
//! ```
//!
//! Results flow back up the same chain unmodified by the HTTP and URL layers.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Client configuration
pub mod config;

/// Basic auth credentials
pub mod auth;

/// GET-only authenticated HTTP client and URL builder
pub mod http;

/// Paginated collection (the core)
pub mod pagination;

/// Resource mappers (spaces, pages)
pub mod resources;

/// High-level Confluence facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Confluence;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use resources::{Page, Space};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
