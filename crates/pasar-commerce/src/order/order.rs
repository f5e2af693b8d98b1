//! Order read models.

use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, OrderItemId, ProductId, SellerId, UserId};
use crate::money::Money;
use crate::order::{OrderStatus, SellerStatus};

/// An order as served by the order service. Created server-side at
/// checkout; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order identifier (e.g. `ORD-20260114-a1b2c3`).
    pub id: OrderId,
    /// Buyer.
    pub user_id: UserId,
    /// Seller the order belongs to.
    #[serde(rename = "business_id")]
    pub seller_id: SellerId,
    /// Buyer WhatsApp number.
    #[serde(rename = "no_whatsapp_pembeli")]
    pub buyer_whatsapp: String,
    /// Free-text note from the buyer.
    #[serde(rename = "catatan", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Items, in the order they were submitted.
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Order total.
    #[serde(rename = "total_harga")]
    pub total: Money,
    /// Buyer-facing status.
    #[serde(default)]
    pub status: OrderStatus,
    /// Seller-facing status driving the fulfillment track.
    #[serde(rename = "status_umkm", default)]
    pub seller_status: SellerStatus,
    /// Creation timestamp, carried as the backend's string.
    pub created_at: String,
}

impl Order {
    /// Total item count, the sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// One item of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Item identifier.
    pub id: OrderItemId,
    /// Product ordered.
    pub product_id: ProductId,
    /// Quantity.
    #[serde(rename = "jumlah")]
    pub quantity: i64,
    /// Unit price at order time.
    #[serde(rename = "harga_satuan")]
    pub unit_price: Money,
    /// Item subtotal as computed server-side.
    pub subtotal: Money,
}

/// Detail payload of `GET /api/orders/{id}`.
///
/// The WhatsApp message and deep link are generated server-side from the
/// seller's contact handle and the order context; both are opaque strings
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    /// The order itself.
    pub order: Order,
    /// Prefilled chat message for the seller.
    pub whatsapp_message: String,
    /// `wa.me` deep link to open.
    pub whatsapp_link: String,
}
