//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Confluence;
use crate::config::ClientConfig;
use crate::error::Result;
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.build_client()?;

        match &self.cli.command {
            Commands::Spaces => {
                let spaces = client.get_all_spaces().await?;
                self.emit(&spaces)
            }
            Commands::Pages { space_id } => {
                let pages = client.get_all_pages_in_space(space_id).await?;
                self.emit(&pages)
            }
        }
    }

    /// Build the client from flags, falling back to the environment
    fn build_client(&self) -> Result<Confluence> {
        let mut builder = ClientConfig::builder();

        match (&self.cli.base_url, &self.cli.username, &self.cli.token) {
            (Some(base_url), Some(username), Some(token)) => {
                // Endpoint path overrides are optional and env-only, so they
                // apply even when every credential came from a flag
                builder = builder
                    .base_url(base_url)
                    .username(username)
                    .api_token(token)
                    .paths_from_env();
            }
            _ => {
                let env = ClientConfig::from_env()?;
                builder = builder
                    .base_url(self.cli.base_url.clone().unwrap_or(env.base_url))
                    .username(self.cli.username.clone().unwrap_or(env.username))
                    .api_token(self.cli.token.clone().unwrap_or(env.api_token))
                    .spaces_path(env.spaces_path)
                    .pages_path(env.pages_path);
            }
        }

        let mut client = Confluence::new(&builder.build()?)?;
        if self.cli.max_pages > 0 {
            client = client.with_max_pages(self.cli.max_pages);
        }
        Ok(client)
    }

    /// Write records to stdout in the selected format
    fn emit<T: Serialize>(&self, records: &[T]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for record in records {
                    println!("{}", serde_json::to_string(record)?);
                }
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(records)?);
            }
        }
        Ok(())
    }
}
