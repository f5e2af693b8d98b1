//! Curated gift packages.

use crate::catalog::SellerRef;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Seller id under which all gift packages are grouped.
pub const GIFT_PACKAGE_SELLER_ID: &str = "special_packages";

/// Display name for the synthetic gift-package seller.
pub const GIFT_PACKAGE_SELLER_NAME: &str = "Paket Spesial";

/// An admin-curated bundle sold as a single unit.
///
/// Packages are seller-agnostic: in the cart they live under the synthetic
/// [`GIFT_PACKAGE_SELLER_ID`] seller and otherwise follow ordinary line
/// rules. Package ids share the product id space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiftPackage {
    /// Package identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Bundle price.
    pub price: Money,
    /// Remaining stock.
    #[serde(default)]
    pub stok: i64,
    /// Contents of the bundle, as display strings.
    #[serde(default)]
    pub items: Vec<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl GiftPackage {
    /// The synthetic seller identity used for every package line.
    pub fn seller_ref() -> SellerRef {
        SellerRef::new(GIFT_PACKAGE_SELLER_ID, GIFT_PACKAGE_SELLER_NAME)
    }
}
