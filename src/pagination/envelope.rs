//! Page envelope extraction

use serde_json::Value;

/// One page of a paginated collection, as extracted from a response body.
///
/// The consumed shape is `{ results: [...], _links: { next?: "..." } }`.
/// Produced once per HTTP call and discarded after its fields are read.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvelope {
    /// Records on this page, in server order. Empty when the field is
    /// absent or not an array.
    pub results: Vec<Value>,
    /// Link to the next page. `None` marks the terminal page; an empty
    /// string from the server counts as absent.
    pub next: Option<String>,
}

impl PageEnvelope {
    /// Extract the envelope from a decoded response body
    pub fn from_body(body: &Value) -> Self {
        let results = body
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let next = body
            .pointer("/_links/next")
            .and_then(Value::as_str)
            .filter(|link| !link.is_empty())
            .map(str::to_string);

        Self { results, next }
    }

    /// Whether this page ends the collection
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}
