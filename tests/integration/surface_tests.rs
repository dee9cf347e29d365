//! Cross-cutting behavior of the assembled router.
//!
//! Tests verify:
//! - Request id and security headers on every response
//! - CORS in development mode
//! - A custom API prefix moves the versioned routes but not /health

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};

use items_api::Config;

use super::test_utils::{TEST_API_KEY, guarded_config, router_for, send, send_request};

#[tokio::test]
async fn test_request_id_is_generated() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/health", None, None).await;
    assert!(res.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let router = router_for(&guarded_config());
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();

    let res = send_request(&router, request).await;
    assert_eq!(res.headers.get("x-request-id").unwrap(), "abc-123");
}

#[tokio::test]
async fn test_security_headers_on_errors_too() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/api/v1/items", None, None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(res.headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(res.headers.get("referrer-policy").unwrap(), "no-referrer");
}

#[tokio::test]
async fn test_development_cors_allows_any_origin() {
    let router = router_for(&guarded_config());
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();

    let res = send_request(&router, request).await;
    assert_eq!(
        res.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_production_cors_uses_allowlist() {
    let config = Config::from_lookup(|key| match key {
        "ENVIRONMENT" => Some("production".to_string()),
        "CORS_ALLOWED_ORIGINS" => Some("https://app.example.com".to_string()),
        _ => None,
    })
    .unwrap();
    let router = router_for(&config);

    let allowed = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://app.example.com")
        .body(Body::empty())
        .unwrap();
    let res = send_request(&router, allowed).await;
    assert_eq!(
        res.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://app.example.com"
    );

    let other = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();
    let res = send_request(&router, other).await;
    assert!(!res.headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_custom_prefix() {
    let config = Config {
        api_prefix: "/api/v2".to_string(),
        ..guarded_config()
    };
    let router = router_for(&config);

    let res = send(&router, Method::GET, "/api/v2/items", Some(TEST_API_KEY), None).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = send(&router, Method::GET, "/api/v1/items", Some(TEST_API_KEY), None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(&router, Method::GET, "/health", None, None).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = send(&router, Method::GET, "/api/v2/openapi.json", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
}
