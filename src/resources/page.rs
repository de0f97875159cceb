//! Page listing projection

use super::string_field;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Canonical page path segment inside a web UI link:
/// `/spaces/<key>/pages/<id>`, with any trailing title slug dropped.
static PAGE_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/spaces/\w+/pages/\d+").expect("valid regex"));

/// A Confluence page, projected down to the fields callers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page body in storage format (`body.storage.value` on the raw record)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Web UI link; reduced to the canonical `/spaces/<key>/pages/<id>`
    /// segment when the link points at a page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Page {
    /// Project a raw record into a [`Page`].
    ///
    /// A web UI link that mentions `/pages/` but does not contain the
    /// canonical segment is a data-shape violation: the whole batch aborts
    /// rather than carrying inconsistent links forward.
    pub fn from_record(record: &Value) -> Result<Self> {
        let webui = string_field(record, "/_links/webui");

        let url = match webui {
            Some(link) if link.contains("/pages/") => match PAGE_PATH_RE.find(&link) {
                Some(canonical) => Some(canonical.as_str().to_string()),
                None => {
                    return Err(Error::data_shape(format!(
                        "web UI link contains /pages/ but no canonical /spaces/<key>/pages/<id> segment: {link}"
                    )))
                }
            },
            other => other,
        };

        Ok(Self {
            id: string_field(record, "/id"),
            title: string_field(record, "/title"),
            body: string_field(record, "/body/storage/value"),
            url,
        })
    }
}

/// Map a collected result set to pages
pub fn map_pages(records: &[Value]) -> Result<Vec<Page>> {
    records.iter().map(Page::from_record).collect()
}
