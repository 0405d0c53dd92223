use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::store::{Entity, Repository, StoreResult};

/// In-memory implementation of [`Repository`].
///
/// Ids are handed out sequentially starting at 1, like a serial column.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    records: RwLock<BTreeMap<i32, T>>,
    next_id: AtomicI32,
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MemoryRepository<T> {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Creates a new memory repository with initial data.
    ///
    /// Records keep their ids; the next assigned id follows the highest one.
    pub fn with_data(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id(), r)).collect()),
            next_id: AtomicI32::new(next_id),
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<T>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        Ok(self.records.read().await.contains_key(&id))
    }

    async fn create(&self, mut entity: T) -> StoreResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        self.records.write().await.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(&entity.id()) {
            Some(existing) => {
                *existing = entity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}
