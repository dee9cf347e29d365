/*
 * Responsibility
 * - Items request/response DTO
 * - validate() only checks content rules; types are checked by serde
 */
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repos::item_repo::{ItemFields, ItemRow};

/// Body for both POST /items and PUT /items/{id}. PUT replaces every field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ItemRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }

        Ok(())
    }

    pub fn into_fields(self) -> ItemFields {
        ItemFields {
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<ItemRow> for ItemResponse {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
        }
    }
}
