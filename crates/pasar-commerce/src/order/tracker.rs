//! Read-only order history with seller-contact links.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::MarketError;
use crate::ids::{OrderId, UserId};
use crate::order::{Order, OrderDetail};

/// Source of a user's orders.
///
/// Implemented over `GET /api/orders/user/all` and `GET /api/orders/{id}`
/// by the data crate; tests substitute scripted fakes.
#[async_trait]
pub trait OrderFeed {
    /// Fetch all orders visible to a user.
    async fn user_orders(&self, user_id: &UserId) -> Result<Vec<Order>, MarketError>;

    /// Fetch one order's detail, including the seller-contact link.
    async fn order_detail(
        &self,
        user_id: &UserId,
        order_id: &OrderId,
    ) -> Result<OrderDetail, MarketError>;
}

/// Read-only view over a user's order history.
///
/// The tracker never writes order state. A failed refresh keeps the
/// last-good list; a stale refresh can never make an order's seller status
/// move backward on screen.
pub struct OrderTracker<F: OrderFeed> {
    user_id: UserId,
    feed: F,
    orders: Vec<Order>,
}

impl<F: OrderFeed> OrderTracker<F> {
    /// Create a tracker with an empty history.
    pub fn new(user_id: UserId, feed: F) -> Self {
        Self {
            user_id,
            feed,
            orders: Vec::new(),
        }
    }

    /// The last successfully fetched orders, as served (newest first).
    /// An empty list is a valid empty state, not an error.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Re-fetch the user's orders.
    ///
    /// On failure the previous list is retained and the error is returned
    /// for the caller to surface as a recoverable notification. On success
    /// the list is replaced, except that a response regressing a known
    /// order's seller status along the fulfillment track (illegal per the
    /// state machine) keeps the known status.
    pub async fn refresh(&mut self) -> Result<&[Order], MarketError> {
        let mut incoming = match self.feed.user_orders(&self.user_id).await {
            Ok(orders) => orders,
            Err(e) => {
                warn!(user = %self.user_id, error = %e, "order refresh failed, keeping last-good list");
                return Err(e);
            }
        };

        for order in incoming.iter_mut() {
            if let Some(known) = self.orders.iter().find(|o| o.id == order.id) {
                let stale = known.seller_status != order.seller_status
                    && !known.seller_status.can_transition_to(order.seller_status);
                if stale {
                    warn!(
                        order = %order.id,
                        known = %known.seller_status,
                        incoming = %order.seller_status,
                        "ignoring stale status regression"
                    );
                    order.seller_status = known.seller_status;
                }
            }
        }

        debug!(user = %self.user_id, orders = incoming.len(), "order list refreshed");
        self.orders = incoming;
        Ok(&self.orders)
    }

    /// Fetch the seller-contact deep link for one order.
    ///
    /// The link is generated server-side; it is opened as-is, never built
    /// or rewritten here.
    pub async fn contact_link(&self, order_id: &OrderId) -> Result<String, MarketError> {
        let detail = self.feed.order_detail(&self.user_id, order_id).await?;
        Ok(detail.whatsapp_link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{OrderItemId, ProductId, SellerId};
    use crate::money::Money;
    use crate::order::{OrderItem, OrderStatus, SellerStatus};
    use futures::executor::block_on;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedFeed {
        responses: Mutex<VecDeque<Result<Vec<Order>, MarketError>>>,
        detail: Option<OrderDetail>,
    }

    impl ScriptedFeed {
        fn new(responses: Vec<Result<Vec<Order>, MarketError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                detail: None,
            }
        }
    }

    #[async_trait]
    impl OrderFeed for ScriptedFeed {
        async fn user_orders(&self, _user_id: &UserId) -> Result<Vec<Order>, MarketError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn order_detail(
            &self,
            _user_id: &UserId,
            order_id: &OrderId,
        ) -> Result<OrderDetail, MarketError> {
            self.detail
                .clone()
                .ok_or_else(|| MarketError::OrderNotFound(order_id.to_string()))
        }
    }

    fn order(id: &str, status: SellerStatus) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new("u1"),
            seller_id: SellerId::new("umkm-1"),
            buyer_whatsapp: "6281234567890".to_string(),
            note: None,
            items: vec![OrderItem {
                id: OrderItemId::new("OI-1"),
                product_id: ProductId::new("prod-1"),
                quantity: 1,
                unit_price: Money::new(50_000),
                subtotal: Money::new(50_000),
            }],
            total: Money::new(50_000),
            status: OrderStatus::Pending,
            seller_status: status,
            created_at: "2026-01-14T09:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_refresh_replaces_list() {
        let feed = ScriptedFeed::new(vec![Ok(vec![order("ORD-1", SellerStatus::Diproses)])]);
        let mut tracker = OrderTracker::new(UserId::new("u1"), feed);

        block_on(tracker.refresh()).unwrap();
        assert_eq!(tracker.orders().len(), 1);
        assert_eq!(tracker.orders()[0].seller_status, SellerStatus::Diproses);
    }

    #[test]
    fn test_empty_result_is_a_valid_empty_state() {
        let feed = ScriptedFeed::new(vec![Ok(Vec::new())]);
        let mut tracker = OrderTracker::new(UserId::new("u1"), feed);

        block_on(tracker.refresh()).unwrap();
        assert!(tracker.orders().is_empty());
    }

    #[test]
    fn test_failed_refresh_keeps_last_good_list() {
        let feed = ScriptedFeed::new(vec![
            Ok(vec![order("ORD-1", SellerStatus::Dikirim)]),
            Err(MarketError::Transport("timeout".to_string())),
        ]);
        let mut tracker = OrderTracker::new(UserId::new("u1"), feed);

        block_on(tracker.refresh()).unwrap();
        let err = block_on(tracker.refresh()).unwrap_err();

        assert!(matches!(err, MarketError::Transport(_)));
        assert_eq!(tracker.orders().len(), 1);
        assert_eq!(tracker.orders()[0].seller_status, SellerStatus::Dikirim);
    }

    #[test]
    fn test_stale_refresh_never_regresses_status() {
        let feed = ScriptedFeed::new(vec![
            Ok(vec![order("ORD-1", SellerStatus::Dikirim)]),
            // A delayed response from before the seller shipped.
            Ok(vec![order("ORD-1", SellerStatus::PendingConfirmation)]),
            Ok(vec![order("ORD-1", SellerStatus::Selesai)]),
        ]);
        let mut tracker = OrderTracker::new(UserId::new("u1"), feed);

        block_on(tracker.refresh()).unwrap();
        block_on(tracker.refresh()).unwrap();
        assert_eq!(tracker.orders()[0].seller_status, SellerStatus::Dikirim);

        // A genuine forward move is still accepted.
        block_on(tracker.refresh()).unwrap();
        assert_eq!(tracker.orders()[0].seller_status, SellerStatus::Selesai);
    }

    #[test]
    fn test_cancellation_is_accepted() {
        let feed = ScriptedFeed::new(vec![
            Ok(vec![order("ORD-1", SellerStatus::Dikirim)]),
            Ok(vec![order("ORD-1", SellerStatus::Dibatalkan)]),
        ]);
        let mut tracker = OrderTracker::new(UserId::new("u1"), feed);

        block_on(tracker.refresh()).unwrap();
        block_on(tracker.refresh()).unwrap();
        assert_eq!(tracker.orders()[0].seller_status, SellerStatus::Dibatalkan);
    }

    #[test]
    fn test_contact_link_is_passed_through_opaque() {
        let mut feed = ScriptedFeed::new(vec![]);
        feed.detail = Some(OrderDetail {
            order: order("ORD-1", SellerStatus::PendingConfirmation),
            whatsapp_message: "Halo! Ada pesanan baru".to_string(),
            whatsapp_link: "https://wa.me/628111?text=Halo".to_string(),
        });
        let tracker = OrderTracker::new(UserId::new("u1"), feed);

        let link = block_on(tracker.contact_link(&OrderId::new("ORD-1"))).unwrap();
        assert_eq!(link, "https://wa.me/628111?text=Halo");
    }

    #[test]
    fn test_contact_link_failure_is_recoverable() {
        let feed = ScriptedFeed::new(vec![]);
        let tracker = OrderTracker::new(UserId::new("u1"), feed);

        let err = block_on(tracker.contact_link(&OrderId::new("ORD-404"))).unwrap_err();
        assert!(matches!(err, MarketError::OrderNotFound(_)));
    }
}
