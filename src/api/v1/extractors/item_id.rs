/*
 * Responsibility
 * - Take the {id} path segment and parse it as an item id
 * - A non-integer id is a 422, same as a malformed body
 * - A negative id is a valid integer that can never exist -> 404
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub u64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Rejected {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: rejection.body_text(),
            })?;

        u64::try_from(id)
            .map(Self)
            .map_err(|_| AppError::not_found("Item"))
    }
}
