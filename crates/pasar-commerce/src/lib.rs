//! Cart and order domain model for the Pasar UMKM storefront.
//!
//! Shoppers browse products from many independent UMKM sellers, add items
//! to a shared cart, and check out into one order per seller, tracked
//! through a seller-controlled status lifecycle and reconciled over
//! WhatsApp. This crate holds the parts with real invariants:
//!
//! - **Catalog**: read models for products, variants, gift packages, events
//! - **Variant resolution**: selection → concrete price and availability
//! - **Cart**: the persisted per-user cart and its mutation operations
//! - **Checkout**: per-seller partitioning with independent submission
//! - **Orders**: the status state machine and the read-only history view
//!
//! # Example
//!
//! ```rust,ignore
//! use pasar_commerce::prelude::*;
//!
//! // At login, rehydrate the user's cart.
//! let storage = KvCartStorage::open_default()?;
//! let mut cart = CartStore::init(user_id, storage)?;
//!
//! // Add a product with a variant selection.
//! let selection: VariantSelection =
//!     [("Ukuran".to_string(), "Besar".to_string())].into_iter().collect();
//! cart.add_item(&product, 1, seller, Some(selection))?;
//!
//! // Check out: one order per seller, failures stay in the cart.
//! let outcome = checkout(&mut cart, &gateway, &contact).await?;
//! for placed in &outcome.succeeded {
//!     println!("order {} placed with {}", placed.order_id, placed.seller_id);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod order;
pub mod variant;

pub use error::MarketError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::MarketError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Event, GiftPackage, Product, SellerRef, VariantOption, VariantType};

    // Variant resolution
    pub use crate::variant::{resolve, ResolvedVariant, VariantSelection};

    // Cart
    pub use crate::cart::{
        CartLine, CartStorage, CartStore, KvCartStorage, LineKey, MemoryCartStorage,
    };

    // Checkout
    pub use crate::checkout::{
        checkout, partition_by_seller, BuyerContact, CheckoutOutcome, CreateOrderRequest,
        FailedPartition, OrderGateway, PlacedOrder, SellerPartition,
    };

    // Orders
    pub use crate::order::{
        Order, OrderDetail, OrderFeed, OrderItem, OrderStatus, OrderTracker, SellerStatus,
    };
}
