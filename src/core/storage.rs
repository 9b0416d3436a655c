//! Durable key-value storage.
//!
//! [`KeyValueStore`] is the seam between session handling and the browser:
//! [`LocalStorage`] talks to `window.localStorage`; tests use an in-memory
//! store.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::core::error::StorageError;
use crate::utils::dom;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read an entry. Missing keys and unavailable storage both yield `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write an entry, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove an entry. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed(key.to_string()))
    }
}

/// In-memory storage.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
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

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let store = MemoryStorage::new();
        assert!(store.is_empty());
        assert_eq!(store.get_item("k"), None);

        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k"), Some("v".to_string()));

        store.set_item("k", "w").unwrap();
        assert_eq!(store.get_item("k"), Some("w".to_string()));
        assert_eq!(store.len(), 1);

        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k"), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryStorage::with_entries([("a", "1")]);
        assert!(store.remove_item("b").is_ok());
        assert_eq!(store.len(), 1);
    }
}
