//! Confluence facade
//!
//! Ties config, the HTTP client, the collector, and the mappers together
//! behind the two operations callers actually use.

use crate::auth::BasicCredentials;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::Collector;
use crate::resources::{map_pages, map_spaces, Page, Space};
use tracing::info;

/// High-level Confluence client
#[derive(Debug)]
pub struct Confluence {
    http: HttpClient,
    spaces_path: String,
    pages_path: String,
    max_pages: Option<usize>,
}

impl Confluence {
    /// Create a client from a validated configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let credentials = BasicCredentials::new(&config.username, &config.api_token);
        Ok(Self {
            http: HttpClient::new(&config.base_url, &credentials),
            spaces_path: config.spaces_path.clone(),
            pages_path: config.pages_path.clone(),
            max_pages: None,
        })
    }

    /// Cap the number of pages followed per collection (off by default)
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Fetch every current global space.
    ///
    /// Returns an empty vec when no spaces exist; a failed fetch is an error,
    /// never an empty result.
    pub async fn get_all_spaces(&self) -> Result<Vec<Space>> {
        let request = RequestConfig::new()
            .query("type", "global")
            .query("status", "current")
            .query("limit", 250);
        let url = self.http.url(&self.spaces_path, &request.query);

        let records = self.collector().collect(&url, &request.headers).await?;
        let spaces = map_spaces(&records)?;
        info!(count = spaces.len(), "spaces fetched");
        Ok(spaces)
    }

    /// Fetch every current page in a space, bodies in storage format.
    pub async fn get_all_pages_in_space(&self, space_id: &str) -> Result<Vec<Page>> {
        let request = RequestConfig::new()
            .query("limit", 250)
            .query("space-id", space_id)
            .query("status", "current")
            .query("body-format", "storage");
        let url = self.http.url(&self.pages_path, &request.query);

        let records = self.collector().collect(&url, &request.headers).await?;
        let pages = map_pages(&records)?;
        info!(space_id, count = pages.len(), "pages fetched");
        Ok(pages)
    }

    fn collector(&self) -> Collector<'_> {
        let collector = Collector::new(&self.http);
        match self.max_pages {
            Some(max) => collector.with_max_pages(max),
            None => collector,
        }
    }
}
