//! Storage boundary
//!
//! Session and preference persistence goes through an injected adapter
//! instead of being written wherever the view code happens to run. The
//! core ships the in-memory implementation; durable backends (a browser's
//! local storage, a config file) are host collaborators.

use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

/// Errors crossing the storage boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store rejected the operation (quota, unavailable).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// A stored payload failed to serialize or parse.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Key/value persistence for small UI payloads (session, preferences).
pub trait StorageAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process adapter. Shareable across views; never fails.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap(), Some("dark".to_string()));

        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap(), Some("light".to_string()));

        storage.remove("theme").unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("absent").unwrap(), None);
        // Removing an absent key is not an error
        storage.remove("absent").unwrap();
    }
}
