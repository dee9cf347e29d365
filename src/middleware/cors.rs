//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers. Server-to-server calls are not restricted by it.
//! - Applied at the Router level (not inside handlers).
//!
//! Policy:
//! - Development: wildcard origin, methods and headers, WITHOUT credentials.
//! - Production: allowlist origins from Config (`CORS_ALLOWED_ORIGINS`), WITHOUT credentials.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

/// Apply CORS policy to the given Router.
///
/// IMPORTANT:
/// - tower-http refuses wildcard origin (`Any`) together with `allow_credentials(true)`.
pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    if !config.app_env.is_production() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    // An empty allowlist allows nothing (no CORS headers at all).
    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
        allowed.iter().any(|v| v == origin)
    });

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(std::time::Duration::from_secs(60 * 10))
}
