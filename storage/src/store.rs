// storage/src/store.rs

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use models::errors::{StoreError, StoreResult};
use models::resource::{DeleteSelector, Resource};

use crate::engine::StorageEngine;

/// Helper to serialize a record to JSON bytes.
pub fn encode<T: Serialize>(record: &T) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Helper to deserialize JSON bytes back into a record.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> StoreResult<T> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Deserialization(e.to_string()))
}

/// Typed record store over any engine: one collection per `Resource`,
/// addressed per record. This is the whole persistence surface the
/// handlers use.
#[derive(Clone)]
pub struct ResourceStore {
    engine: Arc<dyn StorageEngine>,
}

impl ResourceStore {
    pub fn new(engine: Arc<dyn StorageEngine>) -> Self {
        ResourceStore { engine }
    }

    /// Writes a record under its key, inserting or overwriting.
    pub async fn put<R: Resource>(&self, record: &R) -> StoreResult<()> {
        let bytes = encode(record)?;
        self.engine
            .insert(R::COLLECTION, record.key().as_bytes(), &bytes)
            .await
    }

    pub async fn get<R: Resource>(&self, key: &str) -> StoreResult<Option<R>> {
        match self.engine.retrieve(R::COLLECTION, key.as_bytes()).await? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// The entire collection, in key order.
    pub async fn all<R: Resource>(&self) -> StoreResult<Vec<R>> {
        let pairs = self.engine.scan(R::COLLECTION).await?;
        let mut records = Vec::with_capacity(pairs.len());
        for (_, value) in pairs {
            records.push(decode(&value)?);
        }
        Ok(records)
    }

    /// Replaces an existing record; NotFound if the key is absent.
    pub async fn replace<R: Resource>(&self, record: &R) -> StoreResult<()> {
        let key = record.key();
        if self
            .engine
            .retrieve(R::COLLECTION, key.as_bytes())
            .await?
            .is_none()
        {
            return Err(StoreError::NotFound(key));
        }
        self.put(record).await
    }

    /// Removes every record the selector matches; returns the count.
    pub async fn delete_matching<R: Resource>(
        &self,
        selector: &DeleteSelector,
    ) -> StoreResult<usize> {
        let records: Vec<R> = self.all().await?;
        let mut removed = 0;
        for record in records.iter().filter(|r| r.matches(selector)) {
            if self
                .engine
                .remove(R::COLLECTION, record.key().as_bytes())
                .await?
            {
                removed += 1;
            }
        }
        debug!(collection = R::COLLECTION, removed, "delete_matching");
        Ok(removed)
    }

    pub async fn flush(&self) -> StoreResult<()> {
        self.engine.flush().await
    }
}
