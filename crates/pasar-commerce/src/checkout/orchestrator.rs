//! Checkout submission across seller partitions.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::cart::{CartStorage, CartStore};
use crate::checkout::{build_order_request, partition_by_seller, BuyerContact, CreateOrderRequest};
use crate::error::MarketError;
use crate::ids::{OrderId, SellerId, UserId};

/// Backend accepting order-creation requests.
///
/// Implemented over `POST /api/orders` by the data crate; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait OrderGateway {
    /// Submit one seller's order. Returns the created order id.
    async fn submit_order(
        &self,
        user_id: &UserId,
        request: &CreateOrderRequest,
    ) -> Result<OrderId, MarketError>;
}

/// A partition the backend accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    /// Seller whose partition was submitted.
    pub seller_id: SellerId,
    /// Order id minted by the backend.
    pub order_id: OrderId,
}

/// A partition the backend rejected or that failed in transit.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedPartition {
    /// Seller whose partition failed.
    pub seller_id: SellerId,
    /// Human-readable reason, surfaced by the presentation layer.
    pub reason: String,
}

/// Per-partition result of a checkout.
///
/// Partial success is an expected outcome, not an error: the caller decides
/// how to surface a mix of placed and failed partitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutOutcome {
    /// Partitions accepted by the backend, in submission order.
    pub succeeded: Vec<PlacedOrder>,
    /// Partitions that failed, in submission order.
    pub failed: Vec<FailedPartition>,
}

impl CheckoutOutcome {
    /// Check if every partition was accepted.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Check if some partitions succeeded and some failed.
    pub fn is_partial(&self) -> bool {
        !self.succeeded.is_empty() && !self.failed.is_empty()
    }
}

/// Convert the cart into one order per seller and submit them.
///
/// Partitions are submitted sequentially so a later seller's failure can
/// never roll back an earlier seller's already-created order; the orders
/// are independent resources, not a transaction. Each accepted partition
/// is cleared from the cart; failed partitions stay so the shopper can
/// retry checkout without rebuilding their selections. There is no
/// automatic retry.
pub async fn checkout<S: CartStorage, G: OrderGateway>(
    cart: &mut CartStore<S>,
    gateway: &G,
    contact: &BuyerContact,
) -> Result<CheckoutOutcome, MarketError> {
    contact.validate()?;
    if cart.is_empty() {
        return Err(MarketError::EmptyCart);
    }

    let user_id = cart.user_id().clone();
    let partitions = partition_by_seller(cart.lines());
    info!(user = %user_id, partitions = partitions.len(), "submitting checkout");

    let mut outcome = CheckoutOutcome::default();
    for partition in &partitions {
        let request = build_order_request(partition, contact);
        match gateway.submit_order(&user_id, &request).await {
            Ok(order_id) => {
                cart.clear_seller(&partition.seller.id)?;
                info!(seller = %partition.seller.id, order = %order_id, "order placed");
                outcome.succeeded.push(PlacedOrder {
                    seller_id: partition.seller.id.clone(),
                    order_id,
                });
            }
            Err(e) => {
                warn!(seller = %partition.seller.id, error = %e, "order submission failed");
                outcome.failed.push(FailedPartition {
                    seller_id: partition.seller.id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MemoryCartStorage;
    use crate::catalog::{Product, SellerRef};
    use crate::ids::ProductId;
    use crate::money::Money;
    use futures::executor::block_on;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct FakeGateway {
        failing_sellers: HashSet<String>,
        submissions: Mutex<Vec<CreateOrderRequest>>,
    }

    impl FakeGateway {
        fn new(failing: &[&str]) -> Self {
            Self {
                failing_sellers: failing.iter().map(|s| s.to_string()).collect(),
                submissions: Mutex::new(Vec::new()),
            }
        }

        fn submitted_sellers(&self) -> Vec<String> {
            self.submissions
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.seller_id.to_string())
                .collect()
        }
    }

    #[async_trait]
    impl OrderGateway for FakeGateway {
        async fn submit_order(
            &self,
            _user_id: &UserId,
            request: &CreateOrderRequest,
        ) -> Result<OrderId, MarketError> {
            self.submissions.lock().unwrap().push(request.clone());
            if self.failing_sellers.contains(request.seller_id.as_str()) {
                return Err(MarketError::Transport("connection refused".to_string()));
            }
            Ok(OrderId::new(format!("ORD-{}", request.seller_id)))
        }
    }

    fn product(id: &str, seller: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            seller_id: SellerId::new(seller),
            name: format!("Produk {}", id),
            description: None,
            price: Money::new(price),
            available: true,
            variant_types: Vec::new(),
        }
    }

    fn seller(id: &str) -> SellerRef {
        SellerRef::new(id, format!("Toko {}", id))
    }

    fn two_seller_cart() -> CartStore<MemoryCartStorage> {
        let mut cart = CartStore::init(UserId::new("u1"), MemoryCartStorage::new()).unwrap();
        cart.add_item(&product("P1", "S1", 50_000), 2, seller("S1"), None)
            .unwrap();
        cart.add_item(&product("P2", "S2", 30_000), 1, seller("S2"), None)
            .unwrap();
        cart
    }

    #[test]
    fn test_full_success_clears_whole_cart() {
        let mut cart = two_seller_cart();
        let gateway = FakeGateway::new(&[]);
        let contact = BuyerContact::new("6281234567890");

        let outcome = block_on(checkout(&mut cart, &gateway, &contact)).unwrap();

        assert!(outcome.all_succeeded());
        assert_eq!(outcome.succeeded.len(), 2);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_partial_failure_keeps_failed_partition_in_cart() {
        let mut cart = two_seller_cart();
        let gateway = FakeGateway::new(&["S2"]);
        let contact = BuyerContact::new("6281234567890");

        let outcome = block_on(checkout(&mut cart, &gateway, &contact)).unwrap();

        assert!(outcome.is_partial());
        assert_eq!(outcome.succeeded.len(), 1);
        assert_eq!(outcome.succeeded[0].seller_id.as_str(), "S1");
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].seller_id.as_str(), "S2");

        // Only S2's line is left for retry.
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].seller.id.as_str(), "S2");
    }

    #[test]
    fn test_early_failure_does_not_abort_remaining_partitions() {
        let mut cart = two_seller_cart();
        let gateway = FakeGateway::new(&["S1"]);
        let contact = BuyerContact::new("6281234567890");

        let outcome = block_on(checkout(&mut cart, &gateway, &contact)).unwrap();

        assert_eq!(gateway.submitted_sellers(), vec!["S1", "S2"]);
        assert_eq!(outcome.succeeded[0].seller_id.as_str(), "S2");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].seller.id.as_str(), "S1");
    }

    #[test]
    fn test_submissions_are_sequential_in_cart_order() {
        let mut cart = two_seller_cart();
        let gateway = FakeGateway::new(&[]);
        let contact = BuyerContact::new("6281234567890");

        block_on(checkout(&mut cart, &gateway, &contact)).unwrap();

        assert_eq!(gateway.submitted_sellers(), vec!["S1", "S2"]);
    }

    #[test]
    fn test_empty_cart_is_rejected_before_submission() {
        let mut cart = CartStore::init(UserId::new("u1"), MemoryCartStorage::new()).unwrap();
        let gateway = FakeGateway::new(&[]);
        let contact = BuyerContact::new("6281234567890");

        let err = block_on(checkout(&mut cart, &gateway, &contact)).unwrap_err();
        assert!(matches!(err, MarketError::EmptyCart));
        assert!(gateway.submitted_sellers().is_empty());
    }

    #[test]
    fn test_invalid_contact_is_rejected_before_submission() {
        let mut cart = two_seller_cart();
        let gateway = FakeGateway::new(&[]);
        let contact = BuyerContact::new("");

        let err = block_on(checkout(&mut cart, &gateway, &contact)).unwrap_err();
        assert!(matches!(err, MarketError::InvalidContact(_)));
        assert!(gateway.submitted_sellers().is_empty());
        assert_eq!(cart.lines().len(), 2);
    }
}
