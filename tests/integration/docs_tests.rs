//! Documentation endpoint tests.
//!
//! Tests verify:
//! - Open mode serves /docs, /redoc and the OpenAPI document without a key
//! - Guarded mode requires the same bearer key as the items routes
//! - Disabled mode registers nothing

use axum::http::{Method, StatusCode, header};

use items_api::Config;

use super::test_utils::{TEST_API_KEY, guarded_config, router_for, send};

const DOC_PATHS: [&str; 3] = ["/docs", "/redoc", "/api/v1/openapi.json"];

#[tokio::test]
async fn test_open_docs_need_no_key() {
    let router = router_for(&guarded_config());

    for path in DOC_PATHS {
        let res = send(&router, Method::GET, path, None, None).await;
        assert_eq!(res.status, StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_openapi_document_describes_items() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/api/v1/openapi.json", None, None).await;
    let doc = res.json();

    assert_eq!(doc["info"]["title"], "AWS ECS API Template");
    assert_eq!(doc["info"]["version"], "1.0.0");
    assert!(doc["paths"]["/api/v1/items"]["get"].is_object());
    assert!(doc["paths"]["/api/v1/items"]["post"].is_object());
    assert!(doc["paths"]["/api/v1/items/{id}"]["delete"].is_object());
    assert!(doc["paths"]["/health"]["get"].is_object());
    assert_eq!(doc["components"]["securitySchemes"]["bearer"]["scheme"], "bearer");
}

#[tokio::test]
async fn test_swagger_page_points_at_openapi() {
    let router = router_for(&guarded_config());

    let res = send(&router, Method::GET, "/docs", None, None).await;
    let content_type = res.headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();

    assert!(content_type.starts_with("text/html"));
    assert!(res.text().contains("/api/v1/openapi.json"));
}

#[tokio::test]
async fn test_guarded_docs_need_key() {
    let config = Config {
        enable_api_key_docs: true,
        ..guarded_config()
    };
    let router = router_for(&config);

    for path in DOC_PATHS {
        let res = send(&router, Method::GET, path, None, None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(res.headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");

        let res = send(&router, Method::GET, path, Some(TEST_API_KEY), None).await;
        assert_eq!(res.status, StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_disabled_docs_are_absent() {
    let config = Config {
        enable_docs: false,
        ..guarded_config()
    };
    let router = router_for(&config);

    for path in DOC_PATHS {
        let res = send(&router, Method::GET, path, Some(TEST_API_KEY), None).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "{path}");
    }
}
