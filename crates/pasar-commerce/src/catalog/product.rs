//! Product and variant definition types.

use crate::ids::{ProductId, SellerId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the shared catalog, read-only to this crate.
///
/// Every product belongs to exactly one seller. Variant-carrying products
/// declare their variant types up front; the selection a buyer makes against
/// them is resolved by [`crate::variant::resolve`] at add-to-cart time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Owning seller.
    pub seller_id: SellerId,
    /// Display name.
    pub name: String,
    /// Full description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base unit price.
    pub price: Money,
    /// Whether the product is currently purchasable.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Variant type definitions, empty for simple products.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_types: Vec<VariantType>,
}

fn default_available() -> bool {
    true
}

impl Product {
    /// Check if this product declares any variants.
    pub fn has_variants(&self) -> bool {
        !self.variant_types.is_empty()
    }

    /// Look up a variant type by name.
    pub fn variant_type(&self, name: &str) -> Option<&VariantType> {
        self.variant_types.iter().find(|vt| vt.name == name)
    }
}

/// A variant dimension on a product (e.g. "Ukuran", "Rasa").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantType {
    /// Dimension name.
    pub name: String,
    /// The options a buyer can choose from.
    pub options: Vec<VariantOption>,
}

impl VariantType {
    /// Look up an option by name.
    pub fn option(&self, name: &str) -> Option<&VariantOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// One choosable option within a variant type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantOption {
    /// Option name (e.g. "Besar", "Coklat").
    pub name: String,
    /// Price adjustment relative to the product base price. May be negative.
    #[serde(default)]
    pub price_delta: Money,
    /// Whether this option can currently be ordered.
    #[serde(default = "default_available")]
    pub available: bool,
}
