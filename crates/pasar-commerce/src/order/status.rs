//! Order status values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MarketError;

/// Seller-controlled order status (`status_umkm`).
///
/// Transitions run forward only: `pending_confirmation` → `diproses` →
/// `dikirim` → `selesai`, with steps allowed to be skipped, and any
/// non-terminal state may move to `dibatalkan`. `selesai` and `dibatalkan`
/// are terminal. This crate renders and validates the value; only the
/// seller writes it, through the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SellerStatus {
    /// Waiting for the seller to confirm the order.
    #[default]
    #[serde(alias = "pending")]
    PendingConfirmation,
    /// Seller accepted and is preparing the order.
    Diproses,
    /// Order is in transit.
    Dikirim,
    /// Order fulfilled. Terminal.
    Selesai,
    /// Order cancelled. Terminal.
    Dibatalkan,
}

impl SellerStatus {
    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerStatus::PendingConfirmation => "pending_confirmation",
            SellerStatus::Diproses => "diproses",
            SellerStatus::Dikirim => "dikirim",
            SellerStatus::Selesai => "selesai",
            SellerStatus::Dibatalkan => "dibatalkan",
        }
    }

    /// Parse a wire value, accepting the legacy `pending` spelling.
    pub fn parse(s: &str) -> Result<Self, MarketError> {
        match s {
            "pending" | "pending_confirmation" => Ok(SellerStatus::PendingConfirmation),
            "diproses" => Ok(SellerStatus::Diproses),
            "dikirim" => Ok(SellerStatus::Dikirim),
            "selesai" => Ok(SellerStatus::Selesai),
            "dibatalkan" => Ok(SellerStatus::Dibatalkan),
            other => Err(MarketError::UnknownStatus(other.to_string())),
        }
    }

    /// Position along the fulfillment track; `None` for cancellation.
    fn stage(&self) -> Option<u8> {
        match self {
            SellerStatus::PendingConfirmation => Some(0),
            SellerStatus::Diproses => Some(1),
            SellerStatus::Dikirim => Some(2),
            SellerStatus::Selesai => Some(3),
            SellerStatus::Dibatalkan => None,
        }
    }

    /// Check if no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SellerStatus::Selesai | SellerStatus::Dibatalkan)
    }

    /// Check whether moving to `next` is a legal transition.
    pub fn can_transition_to(&self, next: SellerStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match (self.stage(), next.stage()) {
            // Cancellation is allowed from any non-terminal state.
            (_, None) => true,
            // Otherwise only strictly forward along the track.
            (Some(from), Some(to)) => to > from,
            (None, Some(_)) => false,
        }
    }
}

impl fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Buyer-facing order status (`status`).
///
/// Rendered as returned by the backend; no machine is enforced client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting payment confirmation.
    #[default]
    Pending,
    /// Payment confirmed.
    Paid,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_allowed() {
        use SellerStatus::*;
        assert!(PendingConfirmation.can_transition_to(Diproses));
        assert!(Diproses.can_transition_to(Dikirim));
        assert!(Dikirim.can_transition_to(Selesai));
        // Steps may be skipped.
        assert!(PendingConfirmation.can_transition_to(Dikirim));
        assert!(Diproses.can_transition_to(Selesai));
    }

    #[test]
    fn test_regressions_rejected() {
        use SellerStatus::*;
        assert!(!Dikirim.can_transition_to(PendingConfirmation));
        assert!(!Dikirim.can_transition_to(Diproses));
        assert!(!Diproses.can_transition_to(PendingConfirmation));
        assert!(!Diproses.can_transition_to(Diproses));
    }

    #[test]
    fn test_cancellation_from_non_terminal_only() {
        use SellerStatus::*;
        assert!(PendingConfirmation.can_transition_to(Dibatalkan));
        assert!(Diproses.can_transition_to(Dibatalkan));
        assert!(Dikirim.can_transition_to(Dibatalkan));
        assert!(!Selesai.can_transition_to(Dibatalkan));
        assert!(!Dibatalkan.can_transition_to(Dibatalkan));
    }

    #[test]
    fn test_terminal_states_never_move() {
        use SellerStatus::*;
        for next in [PendingConfirmation, Diproses, Dikirim, Selesai, Dibatalkan] {
            assert!(!Selesai.can_transition_to(next));
            assert!(!Dibatalkan.can_transition_to(next));
        }
    }

    #[test]
    fn test_parse_accepts_legacy_pending() {
        assert_eq!(
            SellerStatus::parse("pending").unwrap(),
            SellerStatus::PendingConfirmation
        );
        assert_eq!(
            SellerStatus::parse("pending_confirmation").unwrap(),
            SellerStatus::PendingConfirmation
        );
        assert!(SellerStatus::parse("terkirim").is_err());
    }

    #[test]
    fn test_serde_wire_values() {
        let json = serde_json::to_string(&SellerStatus::Diproses).unwrap();
        assert_eq!(json, "\"diproses\"");
        let legacy: SellerStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(legacy, SellerStatus::PendingConfirmation);
        let buyer: OrderStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(buyer, OrderStatus::Paid);
    }
}
