/*
 * Responsibility
 * - URL layout of v1 (mounted under the configured prefix by app.rs)
 * - "/" is public, everything under /items goes through the API key middleware
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    items::{create_item, delete_item, get_item, list_items, update_item},
    root::root,
};

pub fn routes(state: AppState) -> Router<AppState> {
    let items = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        );

    Router::new()
        .route("/", get(root))
        .merge(middleware::auth::api_key::apply(items, state))
}
