//! Variant selection resolution.
//!
//! A buyer's variant choices are resolved against the product definition
//! exactly once, at add-to-cart time. The resolved price is what the cart
//! line carries from then on, so later price edits by the seller do not
//! move a cart the shopper has already built.

use std::collections::BTreeMap;

use crate::catalog::Product;
use crate::error::MarketError;
use crate::money::Money;

/// A buyer's chosen options, variant-type name to option name.
///
/// `BTreeMap` keeps the entries in a canonical sorted order, which the cart
/// relies on for deterministic line keys.
pub type VariantSelection = BTreeMap<String, String>;

/// The concrete purchasable unit a selection resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVariant {
    /// Base price plus the selected options' deltas.
    pub unit_price: Money,
    /// Product availability AND'ed with every selected option's.
    pub available: bool,
    /// Display label, selected option names joined with " / ".
    pub label: Option<String>,
}

/// Resolve a product plus a selection into a price and availability.
///
/// A selection naming a variant type or option the product does not define
/// is rejected; unknown entries are never silently dropped. An empty
/// selection resolves to the product itself.
pub fn resolve(product: &Product, selection: &VariantSelection) -> Result<ResolvedVariant, MarketError> {
    let mut unit_price = product.price;
    let mut available = product.available;
    let mut labels = Vec::with_capacity(selection.len());

    for (type_name, option_name) in selection {
        let variant_type = product.variant_type(type_name).ok_or_else(|| {
            MarketError::UnknownVariantType {
                product: product.id.to_string(),
                variant_type: type_name.clone(),
            }
        })?;
        let option = variant_type.option(option_name).ok_or_else(|| {
            MarketError::UnknownVariantOption {
                variant_type: type_name.clone(),
                option: option_name.clone(),
            }
        })?;

        unit_price = unit_price
            .try_add(option.price_delta)
            .ok_or(MarketError::Overflow)?;
        available = available && option.available;
        labels.push(option.name.clone());
    }

    let label = if labels.is_empty() {
        None
    } else {
        Some(labels.join(" / "))
    };

    Ok(ResolvedVariant {
        unit_price,
        available,
        label,
    })
}
