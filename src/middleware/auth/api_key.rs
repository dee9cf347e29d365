//! API key check for protected routes → AuthorizedToken in request extensions.
//!
//! - Reads `Authorization: Bearer <key>` and hands it to `ApiKeyGuard`.
//! - Rejection is a 401 with `WWW-Authenticate: Bearer` (see `AppError`).
//! - The presented key is never logged.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::api_key::parse_bearer;
use crate::state::AppState;

/// Put the API key check in front of every route of `router`.
///
/// `route_layer` is used so that unknown paths still 404 instead of 401.
///
/// ```ignore
/// let items = Router::new().route("/items", get(list_items));
/// let items = middleware::auth::api_key::apply(items, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, api_key_middleware))
}

async fn api_key_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_bearer);

    let token = match state.auth.authorize(presented) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key rejected"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(bypass = token.is_bypass(), "api key accepted");

    // middleware -> handler
    req.extensions_mut().insert(token);

    Ok(next.run(req).await)
}
