//! Order, payment, and shipping status enums.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Payment status of an order.
///
/// Only `Pending -> Authorized` is driven by the hosted payment flow; the
/// remaining edges belong to back-office order processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Order placed, no confirmation from the gateway yet.
    Pending,
    /// Gateway approved the authorization.
    Authorized,
    /// Funds captured.
    Paid,
    PartiallyRefunded,
    Refunded,
    Voided,
}

impl PaymentStatus {
    /// Stable lowercase name used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::Paid => "paid",
            PaymentStatus::PartiallyRefunded => "partially_refunded",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Voided => "voided",
        }
    }

    /// Parses the persisted name produced by [`PaymentStatus::as_str`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "authorized" => Some(PaymentStatus::Authorized),
            "paid" => Some(PaymentStatus::Paid),
            "partially_refunded" => Some(PaymentStatus::PartiallyRefunded),
            "refunded" => Some(PaymentStatus::Refunded),
            "voided" => Some(PaymentStatus::Voided),
            _ => None,
        }
    }
}

impl StateMachine for PaymentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PaymentStatus::*;
        matches!(
            (self, target),
            (Pending, Authorized)
                | (Pending, Paid)
                | (Pending, Voided)
                | (Authorized, Paid)
                | (Authorized, Voided)
                | (Paid, PartiallyRefunded)
                | (Paid, Refunded)
                | (PartiallyRefunded, PartiallyRefunded)
                | (PartiallyRefunded, Refunded)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PaymentStatus::*;
        match self {
            Pending => vec![Authorized, Paid, Voided],
            Authorized => vec![Paid, Voided],
            Paid => vec![PartiallyRefunded, Refunded],
            PartiallyRefunded => vec![PartiallyRefunded, Refunded],
            Refunded | Voided => vec![],
        }
    }
}

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Complete,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Complete => "complete",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "complete" => Some(OrderStatus::Complete),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// Shipping status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingStatus {
    /// Nothing in the order ships (downloads, services).
    ShippingNotRequired,
    NotYetShipped,
    PartiallyShipped,
    Shipped,
    Delivered,
}

impl ShippingStatus {
    /// Returns true if the order has a physical delivery leg.
    pub fn requires_shipping(&self) -> bool {
        !matches!(self, ShippingStatus::ShippingNotRequired)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingStatus::ShippingNotRequired => "shipping_not_required",
            ShippingStatus::NotYetShipped => "not_yet_shipped",
            ShippingStatus::PartiallyShipped => "partially_shipped",
            ShippingStatus::Shipped => "shipped",
            ShippingStatus::Delivered => "delivered",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "shipping_not_required" => Some(ShippingStatus::ShippingNotRequired),
            "not_yet_shipped" => Some(ShippingStatus::NotYetShipped),
            "partially_shipped" => Some(ShippingStatus::PartiallyShipped),
            "shipped" => Some(ShippingStatus::Shipped),
            "delivered" => Some(ShippingStatus::Delivered),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ══════════════════════════════════════════════════════════════
    // PaymentStatus Transitions
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn pending_can_transition_to_authorized() {
        let status = PaymentStatus::Pending;
        assert!(status.can_transition_to(&PaymentStatus::Authorized));
        assert_eq!(
            status.transition_to(PaymentStatus::Authorized),
            Ok(PaymentStatus::Authorized)
        );
    }

    #[test]
    fn authorized_cannot_be_authorized_again() {
        let status = PaymentStatus::Authorized;
        assert!(!status.can_transition_to(&PaymentStatus::Authorized));
        assert!(status.transition_to(PaymentStatus::Authorized).is_err());
    }

    #[test]
    fn paid_cannot_go_back_to_authorized() {
        assert!(!PaymentStatus::Paid.can_transition_to(&PaymentStatus::Authorized));
    }

    #[test]
    fn refunded_and_voided_are_terminal() {
        assert!(PaymentStatus::Refunded.is_terminal());
        assert!(PaymentStatus::Voided.is_terminal());
        assert!(!PaymentStatus::Pending.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        use PaymentStatus::*;
        for status in [Pending, Authorized, Paid, PartiallyRefunded, Refunded, Voided] {
            for target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&target),
                    "{:?} -> {:?} should be allowed",
                    status,
                    target
                );
            }
        }
    }

    // ══════════════════════════════════════════════════════════════
    // Persistence Names
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn payment_status_names_parse_back() {
        use PaymentStatus::*;
        for status in [Pending, Authorized, Paid, PartiallyRefunded, Refunded, Voided] {
            assert_eq!(PaymentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PaymentStatus::parse("approved"), None);
    }

    #[test]
    fn payment_status_serializes_snake_case() {
        let json = serde_json::to_string(&PaymentStatus::PartiallyRefunded).unwrap();
        assert_eq!(json, "\"partially_refunded\"");
    }

    // ══════════════════════════════════════════════════════════════
    // ShippingStatus
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn only_shipping_not_required_skips_shipping() {
        assert!(!ShippingStatus::ShippingNotRequired.requires_shipping());
        assert!(ShippingStatus::NotYetShipped.requires_shipping());
        assert!(ShippingStatus::Delivered.requires_shipping());
    }

    #[test]
    fn order_status_names_parse_back() {
        assert_eq!(OrderStatus::parse("cancelled"), Some(OrderStatus::Cancelled));
        assert_eq!(OrderStatus::parse(OrderStatus::Processing.as_str()), Some(OrderStatus::Processing));
        assert_eq!(
            ShippingStatus::parse(ShippingStatus::ShippingNotRequired.as_str()),
            Some(ShippingStatus::ShippingNotRequired)
        );
    }
}
