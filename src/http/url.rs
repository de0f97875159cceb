//! Request URL composition
//!
//! Pure string composition: no normalization beyond percent-encoding, no
//! sorting or deduplication of query keys. Parameter order is emitted exactly
//! as given.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters percent-encoded in query keys and values.
///
/// Covers whitespace and the characters that would be read as query syntax
/// (`&`, `=`, `#`, `?`, `+`, `%`) plus the usual URL-hostile set.
const QUERY_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

/// Compose an absolute request URL.
///
/// `path` is either a relative API path joined with `base`, or an already
/// absolute URL (the server-provided next-link case), which passes through
/// untouched so the origin is never prefixed twice. Query pairs are
/// percent-encoded and appended in the order given; an empty slice emits
/// no `?`.
pub fn build_url(base: &str, path: &str, query: &[(String, String)]) -> String {
    let mut url = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    };

    if !query.is_empty() {
        let encoded: Vec<String> = query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, QUERY_ENCODE),
                    utf8_percent_encode(value, QUERY_ENCODE)
                )
            })
            .collect();
        url.push('?');
        url.push_str(&encoded.join("&"));
    }

    url
}
