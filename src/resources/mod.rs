//! Resource mappers
//!
//! Stateless projections from raw collected records to narrow application
//! records. Mappers run only after a collection is fully complete; they never
//! see partial data, and a shape violation in any record aborts the whole
//! batch with a typed error.

mod page;
mod space;

pub use page::{map_pages, Page};
pub use space::{map_spaces, Space};

use serde_json::Value;

/// Extract a string-ish field from a raw record, verbatim.
///
/// Strings come back as-is and numbers are stringified (the API encodes ids
/// as strings but this keeps the projection total over both); anything else
/// counts as absent.
pub(crate) fn string_field(record: &Value, pointer: &str) -> Option<String> {
    match record.pointer(pointer)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
