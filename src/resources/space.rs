//! Space listing projection

use super::string_field;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// A Confluence space, projected down to the fields callers consume.
///
/// Fields absent on the source record stay `None`; there is no defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Space {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "homepageId", skip_serializing_if = "Option::is_none")]
    pub homepage_id: Option<String>,
}

impl Space {
    /// Project a raw record into a [`Space`]
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: string_field(record, "/id"),
            key: string_field(record, "/key"),
            name: string_field(record, "/name"),
            homepage_id: string_field(record, "/homepageId"),
        }
    }
}

/// Map a collected result set to spaces
pub fn map_spaces(records: &[Value]) -> Result<Vec<Space>> {
    Ok(records.iter().map(Space::from_record).collect())
}
