//! Durable cart storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pasar_store::{store_key, Store};

use crate::cart::CartLine;
use crate::error::MarketError;
use crate::ids::UserId;

/// Build the storage key for a user's cart.
pub fn cart_key(user_id: &UserId) -> String {
    store_key!("cart", user_id)
}

/// Backend holding the serialized cart, one entry per user id.
///
/// The cart store writes through this on every mutation, so an
/// implementation must make `save` durable before returning.
pub trait CartStorage {
    /// Load a user's persisted cart, `None` if there is none.
    fn load(&self, user_id: &UserId) -> Result<Option<Vec<CartLine>>, MarketError>;

    /// Persist a user's cart, replacing any previous value.
    fn save(&self, user_id: &UserId, lines: &[CartLine]) -> Result<(), MarketError>;

    /// Remove a user's persisted cart. Absent carts are a no-op.
    fn delete(&self, user_id: &UserId) -> Result<(), MarketError>;
}

/// Cart storage over the [`pasar_store::Store`] key-value backend.
pub struct KvCartStorage {
    store: Store,
}

impl KvCartStorage {
    /// Open the default backing store.
    pub fn open_default() -> Result<Self, MarketError> {
        Ok(Self {
            store: Store::open_default()?,
        })
    }

    /// Wrap an already opened store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl CartStorage for KvCartStorage {
    fn load(&self, user_id: &UserId) -> Result<Option<Vec<CartLine>>, MarketError> {
        Ok(self.store.get(&cart_key(user_id))?)
    }

    fn save(&self, user_id: &UserId, lines: &[CartLine]) -> Result<(), MarketError> {
        Ok(self.store.set(&cart_key(user_id), &lines)?)
    }

    fn delete(&self, user_id: &UserId) -> Result<(), MarketError> {
        Ok(self.store.delete(&cart_key(user_id))?)
    }
}

/// In-memory cart storage.
///
/// Clones share the same map, which makes rehydration observable across
/// store instances in tests and native development.
#[derive(Clone, Default)]
pub struct MemoryCartStorage {
    carts: Arc<Mutex<HashMap<String, Vec<CartLine>>>>,
}

impl MemoryCartStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self, user_id: &UserId) -> Result<Option<Vec<CartLine>>, MarketError> {
        let carts = self
            .carts
            .lock()
            .map_err(|e| MarketError::Storage(e.to_string()))?;
        Ok(carts.get(user_id.as_str()).cloned())
    }

    fn save(&self, user_id: &UserId, lines: &[CartLine]) -> Result<(), MarketError> {
        let mut carts = self
            .carts
            .lock()
            .map_err(|e| MarketError::Storage(e.to_string()))?;
        carts.insert(user_id.to_string(), lines.to_vec());
        Ok(())
    }

    fn delete(&self, user_id: &UserId) -> Result<(), MarketError> {
        let mut carts = self
            .carts
            .lock()
            .map_err(|e| MarketError::Storage(e.to_string()))?;
        carts.remove(user_id.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_key_shape() {
        assert_eq!(cart_key(&UserId::new("user123")), "cart:user123");
    }

    #[test]
    fn test_kv_storage_roundtrip() {
        let storage = KvCartStorage::new(Store::open("test-cart-storage").unwrap());
        let user = UserId::new("u1");
        assert!(storage.load(&user).unwrap().is_none());

        storage.save(&user, &[]).unwrap();
        assert_eq!(storage.load(&user).unwrap(), Some(vec![]));

        storage.delete(&user).unwrap();
        assert!(storage.load(&user).unwrap().is_none());
    }
}
