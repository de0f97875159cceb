//! CLI module
//!
//! Command-line interface for fetching Confluence collections.
//!
//! # Commands
//!
//! - `spaces` - Fetch all current global spaces
//! - `pages` - Fetch all current pages in a space

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
