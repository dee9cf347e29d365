/*
 * Responsibility
 * - /items CRUD handlers
 * - Path id / JSON body come through extractors (rejections are already AppError)
 * - DTO validation -> repo call -> DTO response
 * - The API key is checked by the middleware before any of these run
 *   (mutations take its AuthorizedToken to note bypassed writes in the log)
 */
use axum::{Extension, Json, extract::State};

use crate::{
    api::v1::{
        dto::{
            items::{ItemRequest, ItemResponse},
            messages::MessageResponse,
        },
        extractors::{ItemId, JsonBody},
    },
    error::{AppError, ErrorResponse},
    services::auth::AuthorizedToken,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All items in creation order", body = Vec<ItemResponse>),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<ItemResponse>> {
    let rows = state.items.list().await;
    Json(rows.into_iter().map(ItemResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "No item with this id", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn get_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<ItemResponse>, AppError> {
    let row = state.items.get(id).await?;
    Ok(Json(row.into()))
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = ItemRequest,
    responses(
        (status = 200, description = "The created item", body = ItemResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn create_item(
    State(state): State<AppState>,
    Extension(token): Extension<AuthorizedToken>,
    JsonBody(req): JsonBody<ItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    req.validate().map_err(AppError::validation)?;

    let row = state.items.create(req.into_fields()).await;
    tracing::debug!(item_id = row.id, bypass = token.is_bypass(), "create_item");
    Ok(Json(row.into()))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "The updated item", body = ItemResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "No item with this id", body = ErrorResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn update_item(
    State(state): State<AppState>,
    Extension(token): Extension<AuthorizedToken>,
    ItemId(id): ItemId,
    JsonBody(req): JsonBody<ItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    req.validate().map_err(AppError::validation)?;
    tracing::debug!(item_id = id, bypass = token.is_bypass(), "update_item");

    let row = state.items.update(id, req.into_fields()).await?;
    Ok(Json(row.into()))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "No item with this id", body = ErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(token): Extension<AuthorizedToken>,
    ItemId(id): ItemId,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(item_id = id, bypass = token.is_bypass(), "delete_item");
    state.items.delete(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Item {id} deleted successfully"
    ))))
}
