//! Marketplace error types.

use thiserror::Error;

/// Errors that can occur in cart and order operations.
#[derive(Error, Debug)]
pub enum MarketError {
    /// Selection names a variant type the product does not define.
    #[error("Product {product} has no variant type \"{variant_type}\"")]
    UnknownVariantType {
        product: String,
        variant_type: String,
    },

    /// Selection names an option the variant type does not define.
    #[error("Variant type \"{variant_type}\" has no option \"{option}\"")]
    UnknownVariantOption {
        variant_type: String,
        option: String,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Buyer contact details failed validation.
    #[error("Invalid buyer contact: {0}")]
    InvalidContact(String),

    /// Illegal order status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Unrecognized order status value.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Durable storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Transport error talking to a backend service.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<pasar_store::StoreError> for MarketError {
    fn from(e: pasar_store::StoreError) -> Self {
        MarketError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(e: serde_json::Error) -> Self {
        MarketError::Serialization(e.to_string())
    }
}
