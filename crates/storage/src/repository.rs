use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A value persisted under a key, with the time it was last written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredValue {
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Browser-local-storage style contract: opaque string values under string keys.
///
/// Writes replace the whole value. There is no compare-and-swap, so two
/// writers on the same key are last-write-wins.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_value(&self, key: &str) -> Result<Option<StoredValue>, StorageError>;

    /// Insert or replace the value under `key` in a single write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if nothing was stored, or other storage errors.
    async fn remove_value(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, StoredValue>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get_value(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(
            key.to_owned(),
            StoredValue {
                value: value.to_owned(),
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn remove_value(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key).map(|_| ()).ok_or(StorageError::NotFound)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub local: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let local: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { local }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_value("react-prep-progress").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_replaces_previous_value() {
        let repo = InMemoryRepository::new();
        repo.put_value("k", "first").await.unwrap();
        repo.put_value("k", "second").await.unwrap();

        let stored = repo.get_value("k").await.unwrap().unwrap();
        assert_eq!(stored.value, "second");
    }

    #[tokio::test]
    async fn clones_share_the_same_values() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.put_value("k", "v").await.unwrap();
        assert_eq!(other.get_value("k").await.unwrap().unwrap().value, "v");
    }

    #[tokio::test]
    async fn removing_missing_key_is_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo.remove_value("k").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));

        repo.put_value("k", "v").await.unwrap();
        repo.remove_value("k").await.unwrap();
        assert_eq!(repo.get_value("k").await.unwrap(), None);
    }
}
