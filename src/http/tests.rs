//! Tests for the HTTP client module

use super::*;
use crate::auth::BasicCredentials;
use std::collections::HashMap;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn creds() -> BasicCredentials {
    BasicCredentials::new("user@example.com", "token123")
}

// ============================================================================
// build_url
// ============================================================================

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_build_url_no_params() {
    let url = build_url("https://acme.atlassian.net", "/x", &[]);
    assert_eq!(url, "https://acme.atlassian.net/x");
    assert!(!url.contains('?'));
}

#[test]
fn test_build_url_encodes_and_preserves_order() {
    let url = build_url(
        "https://acme.atlassian.net",
        "/x",
        &pairs(&[("a", "1"), ("b", "two words")]),
    );
    assert_eq!(url, "https://acme.atlassian.net/x?a=1&b=two%20words");
}

#[test]
fn test_build_url_duplicate_keys_kept() {
    let url = build_url(
        "https://acme.atlassian.net",
        "/x",
        &pairs(&[("k", "1"), ("k", "2")]),
    );
    assert_eq!(url, "https://acme.atlassian.net/x?k=1&k=2");
}

#[test]
fn test_build_url_encodes_reserved_chars() {
    let url = build_url(
        "https://acme.atlassian.net",
        "/x",
        &pairs(&[("q", "a&b=c"), ("plus", "1+1")]),
    );
    assert_eq!(
        url,
        "https://acme.atlassian.net/x?q=a%26b%3Dc&plus=1%2B1"
    );
}

#[test]
fn test_build_url_joins_slashes() {
    assert_eq!(
        build_url("https://acme.atlassian.net/", "/wiki/api/v2/spaces", &[]),
        "https://acme.atlassian.net/wiki/api/v2/spaces"
    );
    assert_eq!(
        build_url("https://acme.atlassian.net", "wiki/api/v2/spaces", &[]),
        "https://acme.atlassian.net/wiki/api/v2/spaces"
    );
}

#[test]
fn test_build_url_absolute_passthrough() {
    // Server-provided next-link must not be prefixed again
    let next = "https://acme.atlassian.net/wiki/api/v2/spaces?cursor=abc";
    assert_eq!(build_url("https://other.example", next, &[]), next);
}

// ============================================================================
// HttpClient
// ============================================================================

#[tokio::test]
async fn test_get_json_sends_base_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(header("Content-Type", "application/json"))
        .and(header(
            "Authorization",
            "Basic dXNlckBleGFtcGxlLmNvbTp0b2tlbjEyMw==",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri(), &creds());
    let url = client.url("/api/data", &[]);
    let body = client.get_json(&url, &HashMap::new()).await.unwrap();

    assert_eq!(body["value"], 42);
}

#[tokio::test]
async fn test_get_json_per_call_header_wins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(header("Content-Type", "application/octet-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri(), &creds());
    let url = client.url("/api/data", &[]);
    let headers = HashMap::from([(
        "Content-Type".to_string(),
        "application/octet-stream".to_string(),
    )]);

    client.get_json(&url, &headers).await.unwrap();
}

#[tokio::test]
async fn test_get_json_query_params_reach_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "two words"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri(), &creds());
    let config = RequestConfig::new().query("q", "two words").query("limit", 250);
    let url = client.url("/api/search", &config.query);

    client.get_json(&url, &config.headers).await.unwrap();
}

#[tokio::test]
async fn test_get_json_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri(), &creds());
    let url = client.url("/api/missing", &[]);
    let err = client.get_json(&url, &HashMap::new()).await.unwrap_err();

    assert!(matches!(
        err,
        crate::error::Error::HttpStatus { status: 404, .. }
    ));
}

#[tokio::test]
async fn test_get_json_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri(), &creds());
    let url = client.url("/api/garbage", &[]);
    let err = client.get_json(&url, &HashMap::new()).await.unwrap_err();

    assert!(matches!(err, crate::error::Error::Decode { .. }));
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("limit", 250)
        .query("status", "current")
        .header("X-Request-Id", "abc123");

    assert_eq!(
        config.query,
        vec![
            ("limit".to_string(), "250".to_string()),
            ("status".to_string(), "current".to_string()),
        ]
    );
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
}

#[test]
fn test_http_client_debug_redacts_auth() {
    let client = HttpClient::new("https://acme.atlassian.net", &creds());
    let debug = format!("{client:?}");
    assert!(debug.contains("acme.atlassian.net"));
    assert!(!debug.contains("dXNlckBleGFtcGxlLmNvbQ"));
    assert!(!debug.contains("token123"));
}
