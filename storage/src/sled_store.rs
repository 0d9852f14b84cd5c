// storage/src/sled_store.rs

use std::fs;

use async_trait::async_trait;
use sled::Tree;
use tracing::info;

use models::errors::{StoreError, StoreResult};

use crate::config::StorageConfig;
use crate::engine::StorageEngine;

/// Durable engine backed by sled: one tree per collection, values are
/// JSON bytes, every insert and remove is atomic at the key.
#[derive(Debug, Clone)]
pub struct SledStorage {
    db: sled::Db,
}

impl SledStorage {
    /// Opens (or creates) the database under the configured data
    /// directory.
    pub fn open(config: &StorageConfig) -> StoreResult<Self> {
        let db_path = config.data_directory.join("sled");

        if !db_path.exists() {
            fs::create_dir_all(&db_path).map_err(|e| {
                StoreError::Storage(format!(
                    "failed to create data directory at {:?}: {}",
                    db_path, e
                ))
            })?;
        } else if !db_path.is_dir() {
            return Err(StoreError::Storage(format!(
                "path {:?} exists but is not a directory",
                db_path
            )));
        }

        let mut sled_config = sled::Config::new()
            .path(&db_path)
            .use_compression(config.use_compression);
        if let Some(capacity) = config.cache_capacity {
            sled_config = sled_config.cache_capacity(capacity);
        }

        let db = sled_config.open().map_err(|e| {
            StoreError::Storage(format!("failed to open database at {:?}: {}", db_path, e))
        })?;

        info!(path = ?db_path, "opened sled database");
        Ok(SledStorage { db })
    }

    fn tree(&self, collection: &str) -> StoreResult<Tree> {
        Ok(self.db.open_tree(collection)?)
    }
}

#[async_trait]
impl StorageEngine for SledStorage {
    async fn insert(&self, collection: &str, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let tree = self.tree(collection)?;
        tree.insert(key, value)?;
        Ok(())
    }

    async fn retrieve(&self, collection: &str, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        let tree = self.tree(collection)?;
        Ok(tree.get(key)?.map(|ivec| ivec.to_vec()))
    }

    async fn scan(&self, collection: &str) -> StoreResult<Vec<(Vec<u8>, Vec<u8>)>> {
        let tree = self.tree(collection)?;
        let mut records = Vec::new();
        for item in tree.iter() {
            let (key, value) = item?;
            records.push((key.to_vec(), value.to_vec()));
        }
        Ok(records)
    }

    async fn remove(&self, collection: &str, key: &[u8]) -> StoreResult<bool> {
        let tree = self.tree(collection)?;
        Ok(tree.remove(key)?.is_some())
    }

    async fn flush(&self) -> StoreResult<()> {
        self.db.flush_async().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SledStorage, StorageEngine};
    use crate::config::StorageConfig;

    fn open_in(dir: &std::path::Path) -> SledStorage {
        let config = StorageConfig {
            data_directory: dir.to_path_buf(),
            ..StorageConfig::default()
        };
        SledStorage::open(&config).unwrap()
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let engine = open_in(dir.path());
            engine.insert("rooms", b"r1", b"{\"id\":\"r1\"}").await.unwrap();
            engine.flush().await.unwrap();
        }
        let engine = open_in(dir.path());
        assert_eq!(
            engine.retrieve("rooms", b"r1").await.unwrap(),
            Some(b"{\"id\":\"r1\"}".to_vec())
        );
    }

    #[tokio::test]
    async fn scan_returns_all_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let engine = open_in(dir.path());
        engine.insert("staff", b"a", b"1").await.unwrap();
        engine.insert("staff", b"b", b"2").await.unwrap();
        let pairs = engine.scan("staff").await.unwrap();
        assert_eq!(pairs.len(), 2);
    }
}
