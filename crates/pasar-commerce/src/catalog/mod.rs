//! Catalog read models.
//!
//! Products, sellers, gift packages, and events are owned by the backend
//! catalog service; this crate only reads them.

mod event;
mod package;
mod product;
mod seller;

pub use event::Event;
pub use package::{GiftPackage, GIFT_PACKAGE_SELLER_ID, GIFT_PACKAGE_SELLER_NAME};
pub use product::{Product, VariantOption, VariantType};
pub use seller::SellerRef;
