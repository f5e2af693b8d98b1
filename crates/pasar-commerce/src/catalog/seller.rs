//! Seller identity carried on cart lines and orders.

use crate::ids::SellerId;
use serde::{Deserialize, Serialize};

/// Denormalized seller identity.
///
/// Captured at add-to-cart time so the cart can render, group, and be split
/// by seller without re-fetching product or business data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerRef {
    /// Seller identifier.
    pub id: SellerId,
    /// Display name of the business.
    pub name: String,
    /// WhatsApp contact handle (digits, `628...` convention), if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

impl SellerRef {
    /// Create a seller reference.
    pub fn new(id: impl Into<SellerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            whatsapp: None,
        }
    }

    /// Attach the WhatsApp contact handle.
    pub fn with_whatsapp(mut self, whatsapp: impl Into<String>) -> Self {
        self.whatsapp = Some(whatsapp.into());
        self
    }
}
