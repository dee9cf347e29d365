use axum::Json;

use crate::api::v1::dto::messages::MessageResponse;

pub const WELCOME_MESSAGE: &str = "Welcome to AWS ECS API Template";

/// Welcome message. Public.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Welcome message", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}
