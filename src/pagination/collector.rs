//! Paginated collection loop

use super::envelope::PageEnvelope;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

/// Collects every page of a paginated resource into one ordered sequence.
///
/// Each page fetch is an await point; the accumulator is local to the call
/// and built purely from return values. A failure on any page aborts the
/// whole collection: no partial result is ever returned as if complete.
#[derive(Debug)]
pub struct Collector<'a> {
    client: &'a HttpClient,
    max_pages: Option<usize>,
}

impl<'a> Collector<'a> {
    /// Create a collector over the given client
    pub fn new(client: &'a HttpClient) -> Self {
        Self {
            client,
            max_pages: None,
        }
    }

    /// Cap the number of pages followed.
    ///
    /// Termination is normally guaranteed only by the server eventually
    /// omitting the next-link; the cap turns a misbehaving server into a
    /// [`Error::PageLimit`] instead of an endless chain. Off by default.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Fetch every page reachable from `start_url` and concatenate their
    /// results in page-fetch order.
    ///
    /// An empty page with a next-link continues the chain; a page with no
    /// next-link is terminal even when empty. The same extra headers are
    /// sent on every page request.
    pub async fn collect(
        &self,
        start_url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Vec<Value>> {
        let mut records = Vec::new();
        let mut url = start_url.to_string();
        let mut page_count = 0usize;

        loop {
            if let Some(max) = self.max_pages {
                if page_count >= max {
                    return Err(Error::PageLimit { max_pages: max });
                }
            }

            let body = self.client.get_json(&url, headers).await?;
            let envelope = PageEnvelope::from_body(&body);
            page_count += 1;

            debug!(
                page = page_count,
                count = envelope.results.len(),
                has_next = envelope.next.is_some(),
                "page fetched"
            );

            records.extend(envelope.results);

            match envelope.next {
                // The next-link already encodes all query state; join it
                // with the origin when relative and follow it verbatim.
                Some(next) => url = self.client.url(&next, &[]),
                None => break,
            }
        }

        info!(pages = page_count, records = records.len(), "collection complete");
        Ok(records)
    }
}
