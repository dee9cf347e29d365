/*
 * Responsibility
 * - Request extractors shared by the v1 handlers
 * - Rejections are turned into AppError so every error body has the same shape
 */
mod item_id;
mod json_body;

pub use item_id::ItemId;
pub use json_body::JsonBody;
