//! Key-value store wrapper with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, Mutex, OnceLock};

/// Durable key-value store with automatic JSON serialization.
///
/// Any type implementing `Serialize` and `DeserializeOwned` can be stored.
/// On `wasm32` the store is backed by Spin's Key-Value Store; on native
/// targets it is backed by a process-wide map shared between handles opened
/// with the same name, so rehydration behavior can be exercised off-device.
pub struct Store {
    #[cfg(target_arch = "wasm32")]
    store: spin_sdk::key_value::Store,
    #[cfg(not(target_arch = "wasm32"))]
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

#[cfg(not(target_arch = "wasm32"))]
fn registry() -> &'static Mutex<HashMap<String, Arc<Mutex<HashMap<String, Vec<u8>>>>>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<Mutex<HashMap<String, Vec<u8>>>>>>> =
        OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(not(target_arch = "wasm32"))]
fn named_entries(name: &str) -> Result<Arc<Mutex<HashMap<String, Vec<u8>>>>, StoreError> {
    let mut registry = registry()
        .lock()
        .map_err(|e| StoreError::OpenError(e.to_string()))?;
    Ok(registry.entry(name.to_string()).or_default().clone())
}

impl Store {
    /// Open the default store.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open("default")
    }

    /// Open a named store.
    ///
    /// ```rust,ignore
    /// let store = Store::open("carts")?;
    /// ```
    #[cfg(target_arch = "wasm32")]
    pub fn open(name: &str) -> Result<Self, StoreError> {
        let store = spin_sdk::key_value::Store::open(name)
            .map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(name: &str) -> Result<Self, StoreError> {
        Ok(Self {
            entries: named_entries(name)?,
        })
    }

    /// Get a value, or `None` if the key does not exist.
    ///
    /// ```rust,ignore
    /// let cart: Option<Vec<CartLine>> = store.get("cart:user123")?;
    /// ```
    #[cfg(target_arch = "wasm32")]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key) {
            Ok(Some(bytes)) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::OperationError(e.to_string())),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::OperationError(e.to_string()))?;
        match entries.get(key) {
            Some(bytes) => {
                let value: T = serde_json::from_slice(bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value.
    #[cfg(target_arch = "wasm32")]
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.store
            .set(key, &bytes)
            .map_err(|e| StoreError::OperationError(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::OperationError(e.to_string()))?;
        entries.insert(key.to_string(), bytes);
        Ok(())
    }

    /// Delete a value. Deleting an absent key is a no-op.
    #[cfg(target_arch = "wasm32")]
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store
            .delete(key)
            .map_err(|e| StoreError::OperationError(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::OperationError(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }

    /// Check if a key exists.
    #[cfg(target_arch = "wasm32")]
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.store
            .exists(key)
            .map_err(|e| StoreError::OperationError(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::OperationError(e.to_string()))?;
        Ok(entries.contains_key(key))
    }
}

/// Helper to build namespaced store keys.
///
/// ```rust,ignore
/// let key = store_key!("cart", user_id);
/// // Returns "cart:user123"
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let store = Store::open("test-roundtrip").unwrap();
        store.set("greeting", &"halo".to_string()).unwrap();
        let value: Option<String> = store.get("greeting").unwrap();
        assert_eq!(value.as_deref(), Some("halo"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = Store::open("test-missing").unwrap();
        let value: Option<String> = store.get("nope").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = Store::open("test-delete").unwrap();
        store.set("k", &1_i64).unwrap();
        store.delete("k").unwrap();
        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
    }

    #[test]
    fn test_named_stores_share_state() {
        let a = Store::open("test-shared").unwrap();
        a.set("k", &42_i64).unwrap();

        let b = Store::open("test-shared").unwrap();
        let value: Option<i64> = b.get("k").unwrap();
        assert_eq!(value, Some(42));
    }

    #[test]
    fn test_store_key_macro() {
        let user = "user123";
        assert_eq!(store_key!("cart", user), "cart:user123");
    }
}
