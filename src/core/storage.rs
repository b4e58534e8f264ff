//! Durable key-value storage.
//!
//! Session token, locale and theme are persisted as plain strings.
//! [`LocalStore`] writes through to the browser's localStorage;
//! [`MemoryStore`] keeps everything in memory and backs the host tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::error::StorageError;
use crate::utils::dom;

/// String key-value storage that survives reloads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser localStorage.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed)
    }
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Persist `value`, logging instead of failing.
///
/// In-memory state stays authoritative for the running page when the
/// browser refuses the write (private mode, quota).
pub fn persist(store: &dyn KeyValueStore, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        log::warn!("could not persist {key}: {err}");
    }
}

/// Remove `key`, logging instead of failing.
pub fn forget(store: &dyn KeyValueStore, key: &str) {
    if let Err(err) = store.remove(key) {
        log::warn!("could not remove {key}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_entries([("theme", "dark")]);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get("locale"), None);

        persist(&store, "locale", "en-US");
        assert_eq!(store.get("locale").as_deref(), Some("en-US"));

        forget(&store, "theme");
        assert_eq!(store.get("theme"), None);
    }
}
