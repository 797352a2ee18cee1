use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::instrument;

use crate::modules::items::model::{CreateItemDto, Item};
use crate::utils::errors::AppError;

/// In-memory item storage.
///
/// Cloning the store clones the handle, not the table; all clones share the
/// same underlying data. Identifier assignment happens under the write lock,
/// so ids are unique and strictly increasing for the lifetime of the store.
#[derive(Clone, Debug, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<ItemTable>>,
}

#[derive(Debug, Default)]
struct ItemTable {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Vec<Item> {
        let table = self.inner.read().await;
        table.items.values().cloned().collect()
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: i64) -> Option<Item> {
        let table = self.inner.read().await;
        table.items.get(&id).cloned()
    }

    #[instrument(skip(self, dto))]
    pub async fn create(&self, dto: CreateItemDto) -> Item {
        let mut table = self.inner.write().await;
        table.next_id += 1;
        let item = Item {
            id: table.next_id,
            name: dto.name,
            price: dto.price,
            description: dto.description,
        };
        table.items.insert(item.id, item.clone());
        item
    }

    /// Whole-resource replacement. The id is immutable.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i64, dto: CreateItemDto) -> Result<Item, AppError> {
        let mut table = self.inner.write().await;
        let item = table
            .items
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("item not found")))?;

        item.name = dto.name;
        item.price = dto.price;
        item.description = dto.description;

        Ok(item.clone())
    }

    /// Removal is silent for missing ids; no existence check is performed.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) {
        let mut table = self.inner.write().await;
        table.items.remove(&id);
    }
}
