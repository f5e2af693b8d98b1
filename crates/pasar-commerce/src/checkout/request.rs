//! Seller partitions and order-creation requests.

use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::catalog::SellerRef;
use crate::error::MarketError;
use crate::ids::{ProductId, SellerId};
use crate::money::Money;

/// Longest WhatsApp number the order service accepts.
const MAX_WHATSAPP_LEN: usize = 20;

/// Buyer contact details attached to every order request of a checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuyerContact {
    /// Buyer WhatsApp number the seller replies to.
    #[serde(rename = "no_whatsapp_pembeli")]
    pub whatsapp: String,
    /// Free-text note for the seller.
    #[serde(rename = "catatan", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BuyerContact {
    /// Create contact details with no note.
    pub fn new(whatsapp: impl Into<String>) -> Self {
        Self {
            whatsapp: whatsapp.into(),
            note: None,
        }
    }

    /// Attach a note for the seller.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Validate before any submission happens.
    pub fn validate(&self) -> Result<(), MarketError> {
        let trimmed = self.whatsapp.trim();
        if trimmed.is_empty() {
            return Err(MarketError::InvalidContact(
                "WhatsApp number is required".to_string(),
            ));
        }
        if trimmed.len() > MAX_WHATSAPP_LEN {
            return Err(MarketError::InvalidContact(format!(
                "WhatsApp number longer than {} characters",
                MAX_WHATSAPP_LEN
            )));
        }
        Ok(())
    }
}

/// The subset of a cart belonging to one seller, the unit of submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerPartition {
    /// The seller the lines belong to.
    pub seller: SellerRef,
    /// Lines in their original cart order.
    pub lines: Vec<CartLine>,
}

impl SellerPartition {
    /// Partition total, the sum of line subtotals.
    pub fn total(&self) -> Result<Money, MarketError> {
        self.lines.iter().try_fold(Money::zero(), |acc, line| {
            acc.try_add(line.subtotal()?).ok_or(MarketError::Overflow)
        })
    }
}

/// Split cart lines by seller.
///
/// Partitions come out in first-seen seller order, and each partition keeps
/// its lines in their original cart order.
pub fn partition_by_seller(lines: &[CartLine]) -> Vec<SellerPartition> {
    let mut partitions: Vec<SellerPartition> = Vec::new();
    for line in lines {
        match partitions.iter_mut().find(|p| p.seller.id == line.seller.id) {
            Some(partition) => partition.lines.push(line.clone()),
            None => partitions.push(SellerPartition {
                seller: line.seller.clone(),
                lines: vec![line.clone()],
            }),
        }
    }
    partitions
}

/// One item of an order-creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemRequest {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Quantity.
    #[serde(rename = "jumlah")]
    pub quantity: i64,
    /// Unit price the buyer agreed to at add time.
    #[serde(rename = "harga_satuan")]
    pub unit_price: Money,
}

/// Body of `POST /api/orders`, one per seller partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderRequest {
    /// The seller this order is for.
    #[serde(rename = "business_id")]
    pub seller_id: SellerId,
    /// Buyer WhatsApp number.
    #[serde(rename = "no_whatsapp_pembeli")]
    pub buyer_whatsapp: String,
    /// Free-text note for the seller.
    #[serde(rename = "catatan", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Items drawn from the partition's lines, in cart order.
    pub items: Vec<OrderItemRequest>,
}

/// Build the order request for one partition.
pub fn build_order_request(partition: &SellerPartition, contact: &BuyerContact) -> CreateOrderRequest {
    CreateOrderRequest {
        seller_id: partition.seller.id.clone(),
        buyer_whatsapp: contact.whatsapp.trim().to_string(),
        note: contact.note.clone(),
        items: partition
            .lines
            .iter()
            .map(|line| OrderItemRequest {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineKey;
    use crate::variant::VariantSelection;

    fn line(product: &str, seller: &str, price: i64, quantity: i64) -> CartLine {
        CartLine {
            key: LineKey::derive(&ProductId::new(product), &VariantSelection::new()),
            product_id: ProductId::new(product),
            name: format!("Produk {}", product),
            unit_price: Money::new(price),
            quantity,
            selection: VariantSelection::new(),
            seller: SellerRef::new(seller, format!("Toko {}", seller)),
        }
    }

    #[test]
    fn test_partition_preserves_first_seen_order() {
        let lines = vec![
            line("P1", "S1", 50_000, 2),
            line("P2", "S2", 30_000, 1),
            line("P3", "S1", 5_000, 3),
        ];
        let partitions = partition_by_seller(&lines);

        assert_eq!(partitions.len(), 2);
        assert_eq!(partitions[0].seller.id.as_str(), "S1");
        assert_eq!(partitions[0].lines.len(), 2);
        assert_eq!(partitions[0].lines[1].product_id.as_str(), "P3");
        assert_eq!(partitions[1].seller.id.as_str(), "S2");
    }

    #[test]
    fn test_partition_total() {
        let partitions = partition_by_seller(&[line("P1", "S1", 50_000, 2), line("P3", "S1", 5_000, 1)]);
        assert_eq!(partitions[0].total().unwrap(), Money::new(105_000));
    }

    #[test]
    fn test_contact_validation() {
        assert!(BuyerContact::new("6281234567890").validate().is_ok());
        assert!(BuyerContact::new("   ").validate().is_err());
        assert!(BuyerContact::new("6".repeat(21)).validate().is_err());
    }

    #[test]
    fn test_request_wire_names() {
        let partitions = partition_by_seller(&[line("P1", "S1", 50_000, 2)]);
        let contact = BuyerContact::new("6281234567890").with_note("Tanpa plastik");
        let request = build_order_request(&partitions[0], &contact);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["business_id"], "S1");
        assert_eq!(json["no_whatsapp_pembeli"], "6281234567890");
        assert_eq!(json["catatan"], "Tanpa plastik");
        assert_eq!(json["items"][0]["jumlah"], 2);
        assert_eq!(json["items"][0]["harga_satuan"], 50_000);
    }
}
