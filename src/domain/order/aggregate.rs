//! Order aggregate as seen by the payment integration.
//!
//! Orders are owned by the store; this crate reads them and performs exactly
//! one write, `Pending -> Authorized`, guarded by [`Order::can_mark_as_authorized`].

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::status::{OrderStatus, PaymentStatus, ShippingStatus};
use crate::domain::foundation::{AddressId, OrderId, StateMachine, Timestamp, ValidationError};

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Grand total in the store's primary currency.
    pub order_total: BigDecimal,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub shipping_status: ShippingStatus,
    pub billing_address_id: AddressId,
    pub shipping_address_id: Option<AddressId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// Creates a freshly placed order awaiting payment.
    pub fn place(
        id: OrderId,
        order_total: BigDecimal,
        shipping_status: ShippingStatus,
        billing_address_id: AddressId,
        shipping_address_id: Option<AddressId>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            order_total,
            payment_status: PaymentStatus::Pending,
            order_status: OrderStatus::Pending,
            shipping_status,
            billing_address_id,
            shipping_address_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if a gateway authorization may be recorded for this order.
    ///
    /// Cancelled orders never accept one, and only a pending payment can move
    /// to authorized. A second notification for an already authorized order
    /// therefore fails this check.
    pub fn can_mark_as_authorized(&self) -> bool {
        self.order_status != OrderStatus::Cancelled
            && self.payment_status.can_transition_to(&PaymentStatus::Authorized)
    }

    /// Records the gateway authorization.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when [`Order::can_mark_as_authorized`] is false.
    pub fn mark_as_authorized(&mut self, now: Timestamp) -> Result<(), ValidationError> {
        if self.order_status == OrderStatus::Cancelled {
            return Err(ValidationError::invalid_format(
                "order_status",
                "cancelled orders cannot be authorized",
            ));
        }
        self.payment_status = self.payment_status.transition_to(PaymentStatus::Authorized)?;
        self.updated_at = now;
        Ok(())
    }
}
