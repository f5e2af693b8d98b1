//! Typed client for the order service.

use async_trait::async_trait;
use tracing::debug;

use pasar_commerce::checkout::{CreateOrderRequest, OrderGateway};
use pasar_commerce::ids::{OrderId, UserId};
use pasar_commerce::order::{Order, OrderDetail, OrderFeed, SellerStatus};
use pasar_commerce::MarketError;

use crate::envelope::extract;
use crate::{ApiConfig, FetchClient, FetchError};

/// Client for the order endpoints.
///
/// Every request carries the acting user in the `X-User-ID` header; the
/// service scopes visibility and ownership checks to it.
pub struct OrderServiceClient {
    client: FetchClient,
}

impl OrderServiceClient {
    /// Create a client against the configured backend.
    pub fn new(config: ApiConfig) -> Self {
        let mut client = FetchClient::new()
            .with_base_url(config.base_url)
            .with_default_header("Accept", "application/json");
        if let Some(token) = config.access_token {
            client = client.with_default_header("Authorization", format!("Bearer {}", token));
        }
        Self { client }
    }

    /// `POST /api/orders` — create one seller's order from a checkout
    /// partition. Returns the created order.
    pub fn create_order(
        &self,
        user_id: &UserId,
        request: &CreateOrderRequest,
    ) -> Result<Order, FetchError> {
        debug!(seller = %request.seller_id, items = request.items.len(), "creating order");
        let response = self
            .client
            .post("/orders")
            .header("X-User-ID", user_id.as_str())
            .json(request)?
            .send()?;
        extract(response)
    }

    /// `GET /api/orders/user/all` — every order visible to the user.
    pub fn user_orders(&self, user_id: &UserId) -> Result<Vec<Order>, FetchError> {
        let response = self
            .client
            .get("/orders/user/all")
            .header("X-User-ID", user_id.as_str())
            .send()?;
        extract(response)
    }

    /// `GET /api/orders/{id}` — one order's detail, including the
    /// server-generated WhatsApp message and deep link.
    pub fn order_detail(
        &self,
        user_id: &UserId,
        order_id: &OrderId,
    ) -> Result<OrderDetail, FetchError> {
        let response = self
            .client
            .get(format!("/orders/{}", order_id))
            .header("X-User-ID", user_id.as_str())
            .send()?;
        extract(response)
    }

    /// `PUT /api/orders/{id}/status` — seller-side status update.
    ///
    /// The transition is checked against the status machine before any
    /// request goes out; the service enforces ownership on its side.
    pub fn update_status(
        &self,
        user_id: &UserId,
        order: &Order,
        next: SellerStatus,
    ) -> Result<Order, MarketError> {
        if !order.seller_status.can_transition_to(next) {
            return Err(MarketError::InvalidStatusTransition {
                from: order.seller_status.to_string(),
                to: next.to_string(),
            });
        }

        let response = self
            .client
            .put(format!("/orders/{}/status", order.id))
            .header("X-User-ID", user_id.as_str())
            .json(&serde_json::json!({ "status_umkm": next }))?
            .send()?;
        Ok(extract(response)?)
    }
}

#[async_trait]
impl OrderGateway for OrderServiceClient {
    async fn submit_order(
        &self,
        user_id: &UserId,
        request: &CreateOrderRequest,
    ) -> Result<OrderId, MarketError> {
        let order = self.create_order(user_id, request)?;
        Ok(order.id)
    }
}

#[async_trait]
impl OrderFeed for OrderServiceClient {
    async fn user_orders(&self, user_id: &UserId) -> Result<Vec<Order>, MarketError> {
        Ok(OrderServiceClient::user_orders(self, user_id)?)
    }

    async fn order_detail(
        &self,
        user_id: &UserId,
        order_id: &OrderId,
    ) -> Result<OrderDetail, MarketError> {
        Ok(OrderServiceClient::order_detail(self, user_id, order_id)?)
    }
}
