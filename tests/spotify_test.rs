use std::collections::HashMap;

use spotmood::config;
use spotmood::server::bind_api_server;
use spotmood::spotify::{auth::authorization_url, client::parse_retry_after};

#[test]
fn test_authorization_url_query() {
    let url = authorization_url("my-client", "challenge_abc-123").unwrap();
    let pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert_eq!(pairs["client_id"], "my-client");
    assert_eq!(pairs["response_type"], "code");
    assert_eq!(pairs["code_challenge"], "challenge_abc-123");
    assert_eq!(pairs["code_challenge_method"], "S256");
    assert_eq!(pairs["redirect_uri"], config::spotify_redirect_uri());
    assert_eq!(pairs["scope"], config::spotify_scope());
}

#[test]
fn test_authorization_url_is_encoded() {
    let url = authorization_url("my-client", "challenge").unwrap();
    let query = url.query().unwrap();

    // Scope separators and the redirect URI must not leak into the raw query
    assert!(!query.contains(' '));
    assert!(!query.contains("redirect_uri=http://"));
    assert!(
        query.contains("redirect_uri=http%3A%2F%2F")
            || query.contains("redirect_uri=https%3A%2F%2F")
    );
}

#[test]
fn test_parse_retry_after() {
    assert_eq!(parse_retry_after(Some("7")), 7);
    assert_eq!(parse_retry_after(Some(" 30 ")), 30);
    assert_eq!(parse_retry_after(Some("0")), 0);
}

#[test]
fn test_parse_retry_after_defaults_to_one_second() {
    assert_eq!(parse_retry_after(None), 1);
    assert_eq!(parse_retry_after(Some("")), 1);
    assert_eq!(parse_retry_after(Some("soon")), 1);
    assert_eq!(parse_retry_after(Some("Wed, 21 Oct 2015 07:28:00 GMT")), 1);
}

#[tokio::test]
async fn test_bind_api_server_port_in_use() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    let err = bind_api_server(&addr).await.unwrap_err();
    assert!(err.to_string().contains("Failed to bind callback server"));
}

#[tokio::test]
async fn test_bind_api_server_invalid_address() {
    let err = bind_api_server("not-an-address").await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse server address"));
}

#[tokio::test]
async fn test_bind_api_server_free_port() {
    let listener = bind_api_server("127.0.0.1:0").await.unwrap();
    assert!(listener.local_addr().unwrap().port() > 0);
}
