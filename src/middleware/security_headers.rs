//! Security-related response headers for browser clients.
//!
//! Applied at the Router level. Headers already set by a handler are left alone.
//! The CSP only restricts framing, so the docs pages can still load their CDN bundles.

use axum::Router;
use axum::http::header::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

const SECURITY_HEADERS: &[(&str, &str)] = &[
    // Clickjacking protection (legacy + modern)
    ("x-frame-options", "DENY"),
    ("content-security-policy", "frame-ancestors 'none'"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    ("permissions-policy", "camera=(), microphone=(), geolocation=()"),
];

pub fn apply(router: Router) -> Router {
    SECURITY_HEADERS
        .iter()
        .fold(router, |router, &(name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
}
