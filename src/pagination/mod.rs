//! Pagination module
//!
//! The core of the crate: given a starting URL, follow the server-provided
//! next-link from each page envelope until a page has none, accumulating
//! every page's results into one ordered collection.
//!
//! # Overview
//!
//! The next-link is authoritative: the initial query parameters are encoded
//! into the first URL only, and every subsequent request uses the link the
//! server returned, joined with the origin when it is relative. Pages are
//! fetched strictly sequentially since each continuation is only known after
//! parsing the previous envelope.

mod collector;
mod envelope;

pub use collector::Collector;
pub use envelope::PageEnvelope;
