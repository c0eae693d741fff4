//! Persistence Store
//!
//! Reads and writes the whole list as one JSON blob under a single key.
//! The backend is pluggable so the model can be exercised without a browser.

use thiserror::Error;

use crate::models::Item;

/// Errors crossing the persistence boundary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("failed to read storage: {0}")]
    Read(String),
    #[error("failed to write storage: {0}")]
    Write(String),
    #[error("failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value area holding the serialized blob
pub trait StorageBackend {
    /// Read the raw value under `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Browser `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn area() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::area()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Quota errors surface here as a DOMException
        Self::area()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// Serializes the full item sequence to a backend
pub struct Store<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[cfg(test)]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted items.
    ///
    /// Missing, unreadable or malformed state yields an empty list. Blank
    /// entries are dropped so the non-empty text invariant holds after load.
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::info!("No saved list under '{}', starting empty", self.key);
                return Vec::new();
            }
            Err(e) => {
                log::warn!("Could not read '{}', starting empty: {}", self.key, e);
                return Vec::new();
            }
        };

        let parsed: Vec<Item> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Malformed saved list under '{}', starting empty: {}", self.key, e);
                return Vec::new();
            }
        };

        let total = parsed.len();
        let items: Vec<Item> = parsed
            .into_iter()
            .filter_map(|item| {
                Item::normalize(&item.text).map(|text| Item { text, completed: item.completed })
            })
            .collect();
        if items.len() != total {
            log::warn!("Dropped {} blank saved items", total - items.len());
        }
        log::info!("Loaded {} items", items.len());
        items
    }

    /// Overwrite the persisted blob with exactly `items`
    pub fn save<'a>(&self, items: impl IntoIterator<Item = &'a Item>) -> Result<(), StoreError> {
        let items: Vec<&Item> = items.into_iter().collect();
        let json = serde_json::to_string(&items)?;
        self.backend.write(&self.key, &json)?;
        log::debug!("Saved {} items", items.len());
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::{StorageBackend, StoreError};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory backend that counts writes and can refuse them.
    ///
    /// Clones share the same underlying map.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        values: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<Cell<usize>>,
        fail_writes: Rc<Cell<bool>>,
    }

    impl MemoryStorage {
        pub fn with_value(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.values.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        pub fn writes(&self) -> usize {
            self.writes.get()
        }

        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.set(fail);
        }
    }

    impl StorageBackend for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.fail_writes.get() {
                return Err(StoreError::Write("QuotaExceededError".to_string()));
            }
            self.writes.set(self.writes.get() + 1);
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
