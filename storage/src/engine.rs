// storage/src/engine.rs

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::errors::StoreResult;

/// The storage engine seam: byte keys and values grouped into named
/// collections, with per-key atomic insert and remove. Everything above
/// this trait is engine-agnostic; `SledStorage` is the durable engine
/// and `MemoryStorage` backs tests.
#[async_trait]
pub trait StorageEngine: Send + Sync + 'static {
    async fn insert(&self, collection: &str, key: &[u8], value: &[u8]) -> StoreResult<()>;

    async fn retrieve(&self, collection: &str, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;

    /// Every (key, value) pair in the collection, in key order.
    async fn scan(&self, collection: &str) -> StoreResult<Vec<(Vec<u8>, Vec<u8>)>>;

    /// Removes a key; returns whether it was present.
    async fn remove(&self, collection: &str, key: &[u8]) -> StoreResult<bool>;

    async fn flush(&self) -> StoreResult<()>;
}

type Collection = BTreeMap<Vec<u8>, Vec<u8>>;

/// In-memory engine: one ordered map per collection behind an async
/// RwLock.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

#[async_trait]
impl StorageEngine for MemoryStorage {
    async fn insert(&self, collection: &str, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    async fn retrieve(&self, collection: &str, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|c| c.get(key))
            .cloned())
    }

    async fn scan(&self, collection: &str) -> StoreResult<Vec<(Vec<u8>, Vec<u8>)>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|c| c.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default())
    }

    async fn remove(&self, collection: &str, key: &[u8]) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .map(|c| c.remove(key).is_some())
            .unwrap_or(false))
    }

    async fn flush(&self) -> StoreResult<()> {
        Ok(())
    }
}
