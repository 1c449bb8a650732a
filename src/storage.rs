//! Persistence Adapter
//!
//! Saves the whole list as one JSON blob under a fixed key. Loading never
//! fails: a missing or broken blob reads as an empty list.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::StoredItem;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to read from storage: {0}")]
    Read(String),
    #[error("failed to write to storage: {0}")]
    Write(String),
    #[error("failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Read(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the item list under one key
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored items, or an empty list if nothing usable is stored
    pub fn load(&self) -> Vec<StoredItem> {
        let blob = match self.store.get_item(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                log::info!("[STORAGE] No saved items under '{}'", self.key);
                return Vec::new();
            }
            Err(e) => {
                log::warn!("[STORAGE] {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<StoredItem>>(&blob) {
            Ok(items) => {
                log::info!("[STORAGE] Loaded {} items", items.len());
                items
            }
            Err(e) => {
                log::warn!("[STORAGE] Ignoring unreadable data under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `items`
    pub fn save(&self, items: &[StoredItem]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(items)?;
        self.store.set_item(&self.key, &blob)?;
        log::debug!("[STORAGE] Saved {} items", items.len());
        Ok(())
    }
}
