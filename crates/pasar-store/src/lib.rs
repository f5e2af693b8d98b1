//! Typed key-value persistence for the Pasar UMKM storefront.
//!
//! Provides a simple, ergonomic API for persisting client state (the
//! per-user cart, most importantly) with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use pasar_store::{store_key, Store};
//!
//! let store = Store::open_default()?;
//!
//! // Persist a value
//! store.set(&store_key!("cart", user_id), &lines)?;
//!
//! // Rehydrate it
//! let lines: Option<Vec<CartLine>> = store.get(&store_key!("cart", user_id))?;
//!
//! // Drop it on logout
//! store.delete(&store_key!("cart", user_id))?;
//! ```

mod error;
mod kv;

pub use error::StoreError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Store, StoreError};
}
