//! API key guard integration tests.
//!
//! Tests verify:
//! - Protected routes need `Authorization: Bearer <key>`
//! - Rejections are 401 with `WWW-Authenticate: Bearer`
//! - Disabled auth, or no configured key, lets everything through
//! - Public routes never ask for a key

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;

use items_api::Config;

use super::test_utils::{TEST_API_KEY, guarded_config, router_for, send, send_request};

// =============================================================================
// Rejections
// =============================================================================

#[tokio::test]
async fn test_missing_key_is_unauthorized() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/api/v1/items/1", None, None).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    assert_eq!(res.json()["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_wrong_key_is_unauthorized() {
    let router = router_for(&guarded_config());

    for key in ["nope", "test-api-ke", "test-api-key2", ""] {
        let res = send(&router, Method::GET, "/api/v1/items", Some(key), None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "key {key:?}");
    }
}

#[tokio::test]
async fn test_other_scheme_is_unauthorized() {
    let router = router_for(&guarded_config());
    let request = Request::builder()
        .uri("/api/v1/items")
        .header(header::AUTHORIZATION, format!("Basic {TEST_API_KEY}"))
        .body(Body::empty())
        .unwrap();

    let res = send_request(&router, request).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_lowercase_scheme_is_accepted() {
    let router = router_for(&guarded_config());
    let request = Request::builder()
        .uri("/api/v1/items")
        .header(header::AUTHORIZATION, format!("bearer {TEST_API_KEY}"))
        .body(Body::empty())
        .unwrap();

    let res = send_request(&router, request).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_every_item_route_is_guarded() {
    let router = router_for(&guarded_config());
    let body = json!({"name": "Widget", "description": "", "price": 1.0});

    let cases = [
        (Method::GET, "/api/v1/items", None),
        (Method::POST, "/api/v1/items", Some(body.clone())),
        (Method::GET, "/api/v1/items/1", None),
        (Method::PUT, "/api/v1/items/1", Some(body)),
        (Method::DELETE, "/api/v1/items/1", None),
    ];

    for (method, uri, body) in cases {
        let res = send(&router, method.clone(), uri, None, body).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_rejected_create_does_not_store() {
    let router = router_for(&guarded_config());

    send(
        &router,
        Method::POST,
        "/api/v1/items",
        Some("wrong"),
        Some(json!({"name": "Widget", "description": "", "price": 1.0})),
    )
    .await;

    let res = send(&router, Method::GET, "/api/v1/items", Some(TEST_API_KEY), None).await;
    assert_eq!(res.json(), json!([]));
}

// =============================================================================
// Bypass
// =============================================================================

#[tokio::test]
async fn test_disabled_auth_lets_requests_through() {
    let config = Config {
        enable_api_key_auth: false,
        ..guarded_config()
    };
    let router = router_for(&config);

    let res = send(&router, Method::GET, "/api/v1/items", None, None).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = send(&router, Method::GET, "/api/v1/items", Some("anything"), None).await;
    assert_eq!(res.status, StatusCode::OK);

    // Mutations see the bypass token too.
    let body = json!({"name": "Widget", "description": "", "price": 1.0});
    let res = send(&router, Method::POST, "/api/v1/items", None, Some(body.clone())).await;
    assert_eq!(res.status, StatusCode::OK);
    let res = send(&router, Method::PUT, "/api/v1/items/1", None, Some(body)).await;
    assert_eq!(res.status, StatusCode::OK);
    let res = send(&router, Method::DELETE, "/api/v1/items/1", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_no_configured_key_lets_requests_through() {
    let router = router_for(&Config::default());

    let res = send(
        &router,
        Method::POST,
        "/api/v1/items",
        None,
        Some(json!({"name": "Widget", "description": "", "price": 1.0})),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["id"], 1);
}

// =============================================================================
// Public Routes
// =============================================================================

#[tokio::test]
async fn test_health_needs_no_key() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/health", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!({"status": "healthy", "service": "AWS ECS API Template"})
    );
}

#[tokio::test]
async fn test_root_needs_no_key() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/api/v1", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!({"message": "Welcome to AWS ECS API Template"})
    );
}

#[tokio::test]
async fn test_root_with_trailing_slash() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/api/v1/", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!({"message": "Welcome to AWS ECS API Template"})
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found_without_key() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/api/v1/widgets", None, None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
