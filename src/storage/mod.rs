// Browser-style key-value storage with JSON values.

pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::model::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

/// String-keyed, string-valued storage backend.
pub trait KeyValueStore: Send {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// JSON helpers over a `KeyValueStore`. Failures are logged and reported
/// as `false`/`None`, never returned to the caller.
pub struct LocalStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LocalStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set_item(key, &json));
        match result {
            Ok(()) => true,
            Err(e) => {
                error!("Error saving to local storage [{}]: {}", key, e);
                false
            }
        }
    }

    /// `None` when the key is absent, empty or unreadable.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let item = match self.store.get_item(key) {
            Ok(item) => item,
            Err(e) => {
                error!("Error reading from local storage [{}]: {}", key, e);
                return None;
            }
        };

        let raw = item.filter(|s| !s.is_empty())?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error reading from local storage [{}]: {}", key, e);
                None
            }
        }
    }

    pub fn clear(&mut self, key: &str) -> bool {
        match self.store.remove_item(key) {
            Ok(()) => true,
            Err(e) => {
                error!("Error clearing local storage [{}]: {}", key, e);
                false
            }
        }
    }
}
