//! Cart lines and line keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::SellerRef;
use crate::error::MarketError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::variant::VariantSelection;

/// Deterministic identity of a cart line.
///
/// Two cart entries are the same line if and only if product id AND the full
/// variant selection match. The key is the product id followed by the sorted
/// `type=option` pairs, so it is independent of the order in which the buyer
/// picked the options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineKey(String);

impl LineKey {
    /// Derive the key for a product plus selection.
    pub fn derive(product_id: &ProductId, selection: &VariantSelection) -> Self {
        if selection.is_empty() {
            return Self(product_id.to_string());
        }
        let pairs: Vec<String> = selection
            .iter()
            .map(|(type_name, option)| format!("{}={}", type_name, option))
            .collect();
        Self(format!("{}::{}", product_id, pairs.join("|")))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line in the cart.
///
/// Carries the price resolved at add time and the denormalized seller
/// identity, so the cart renders and splits without re-fetching catalog
/// data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Line identity, derived from product id and selection.
    pub key: LineKey,
    /// The product this line purchases.
    pub product_id: ProductId,
    /// Product display name at add time.
    pub name: String,
    /// Unit price resolved at add time, never re-read live.
    pub unit_price: Money,
    /// Quantity, always >= 1. A line hitting 0 is removed, never kept.
    pub quantity: i64,
    /// The buyer's variant selection; empty for simple products.
    #[serde(default, skip_serializing_if = "VariantSelection::is_empty")]
    pub selection: VariantSelection,
    /// Seller identity captured at add time.
    pub seller: SellerRef,
}

impl CartLine {
    /// Line subtotal, `unit_price * quantity`.
    pub fn subtotal(&self) -> Result<Money, MarketError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(MarketError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(pairs: &[(&str, &str)]) -> VariantSelection {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_key_without_selection_is_product_id() {
        let key = LineKey::derive(&ProductId::new("prod-1"), &VariantSelection::new());
        assert_eq!(key.as_str(), "prod-1");
    }

    #[test]
    fn test_key_is_order_independent() {
        let a = LineKey::derive(
            &ProductId::new("prod-1"),
            &selection(&[("Ukuran", "Besar"), ("Rasa", "Pandan")]),
        );
        let b = LineKey::derive(
            &ProductId::new("prod-1"),
            &selection(&[("Rasa", "Pandan"), ("Ukuran", "Besar")]),
        );
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "prod-1::Rasa=Pandan|Ukuran=Besar");
    }

    #[test]
    fn test_different_selection_is_a_different_key() {
        let a = LineKey::derive(&ProductId::new("prod-1"), &selection(&[("Ukuran", "Besar")]));
        let b = LineKey::derive(&ProductId::new("prod-1"), &selection(&[("Ukuran", "Kecil")]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_subtotal_is_checked() {
        let line = CartLine {
            key: LineKey::derive(&ProductId::new("p"), &VariantSelection::new()),
            product_id: ProductId::new("p"),
            name: "Sambal".to_string(),
            unit_price: Money::new(i64::MAX),
            quantity: 2,
            selection: VariantSelection::new(),
            seller: SellerRef::new("umkm-1", "Warung"),
        };
        assert!(matches!(line.subtotal(), Err(MarketError::Overflow)));
    }
}
