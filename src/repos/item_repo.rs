/*
 * Responsibility
 * - In-memory items registry (sole owner of every ItemRow)
 * - Insertion order is kept; lookups are linear scans
 * - Every operation runs under one lock, so id assignment and mutations never interleave
 */
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Everything on an item except its id. Used for both create and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug)]
struct ItemStore {
    items: Vec<ItemRow>,
    // Monotonic: ids are never handed out twice, even after deletes.
    next_id: u64,
}

impl ItemStore {
    fn position(&self, id: u64) -> Result<usize, RepoError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(RepoError::NotFound { id })
    }
}

/// Cheap to clone; clones share the same underlying registry.
#[derive(Debug, Clone)]
pub struct ItemRepo {
    inner: Arc<Mutex<ItemStore>>,
}

impl Default for ItemRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRepo {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ItemStore {
                items: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Snapshot of all items in insertion order.
    pub async fn list(&self) -> Vec<ItemRow> {
        self.inner.lock().await.items.clone()
    }

    pub async fn get(&self, id: u64) -> Result<ItemRow, RepoError> {
        let store = self.inner.lock().await;
        let idx = store.position(id)?;
        Ok(store.items[idx].clone())
    }

    pub async fn create(&self, fields: ItemFields) -> ItemRow {
        let mut store = self.inner.lock().await;

        let id = store.next_id;
        store.next_id += 1;

        let row = ItemRow {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
        };
        store.items.push(row.clone());

        tracing::info!(item_id = id, "created item");
        row
    }

    /// Replaces name/description/price in place. The id and the position are kept.
    pub async fn update(&self, id: u64, fields: ItemFields) -> Result<ItemRow, RepoError> {
        let mut store = self.inner.lock().await;
        let idx = store.position(id)?;

        let row = ItemRow {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
        };
        store.items[idx] = row.clone();

        tracing::info!(item_id = id, "updated item");
        Ok(row)
    }

    /// Removes the item and returns it. Later items shift down by one.
    pub async fn delete(&self, id: u64) -> Result<ItemRow, RepoError> {
        let mut store = self.inner.lock().await;
        let idx = store.position(id)?;
        let removed = store.items.remove(idx);

        tracing::info!(item_id = id, "deleted item");
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
