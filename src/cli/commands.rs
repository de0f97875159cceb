//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Confluence collection fetcher CLI
#[derive(Parser, Debug)]
#[command(name = "confluence-harvest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Confluence site origin (falls back to CONFLUENCE_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Account username / email (falls back to CONFLUENCE_USERNAME)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// API token (falls back to CONFLUENCE_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Safety cap on pages followed per collection (0 = unlimited)
    #[arg(long, global = true, default_value = "0")]
    pub max_pages: usize,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all current global spaces
    Spaces,

    /// Fetch all current pages in a space
    Pages {
        /// Numeric id of the space to list
        #[arg(long)]
        space_id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Pretty-printed JSON array
    Pretty,
}
