//! Whether a shopper may be sent back to the hosted order page.

use chrono::Duration;

use crate::domain::foundation::Timestamp;
use crate::domain::order::{Order, PaymentStatus};

/// Minimum age of an order before the redirect may be retried.
pub const REPOST_MIN_AGE_SECS: i64 = 60;

/// Returns true if the order may be re-posted to the gateway at `now`.
///
/// The order must still be awaiting payment and must have been placed at
/// least [`REPOST_MIN_AGE_SECS`] seconds ago.
pub fn can_repost(order: &Order, now: Timestamp) -> bool {
    if order.payment_status != PaymentStatus::Pending {
        return false;
    }

    now.duration_since(&order.created_at) >= Duration::seconds(REPOST_MIN_AGE_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AddressId, OrderId};
    use crate::domain::order::ShippingStatus;
    use bigdecimal::BigDecimal;

    fn pending_order(created_at: Timestamp) -> Order {
        Order::place(
            OrderId::new(42).unwrap(),
            BigDecimal::from(10),
            ShippingStatus::ShippingNotRequired,
            AddressId::new(1).unwrap(),
            None,
            created_at,
        )
    }

    #[test]
    fn fresh_order_cannot_repost() {
        let created = Timestamp::from_unix_millis(1_700_000_000_000).unwrap();
        let order = pending_order(created);

        assert!(!can_repost(&order, created));
        assert!(!can_repost(&order, created.plus_secs(59)));
    }

    #[test]
    fn order_exactly_one_minute_old_can_repost() {
        let created = Timestamp::from_unix_millis(1_700_000_000_000).unwrap();
        let order = pending_order(created);

        assert!(can_repost(&order, created.plus_secs(60)));
        assert!(can_repost(&order, created.plus_secs(3600)));
    }

    #[test]
    fn just_under_one_minute_cannot_repost() {
        let created = Timestamp::from_unix_millis(1_700_000_000_000).unwrap();
        let order = pending_order(created);
        let almost = Timestamp::from_unix_millis(1_700_000_059_999).unwrap();

        assert!(!can_repost(&order, almost));
    }

    #[test]
    fn non_pending_order_cannot_repost() {
        let created = Timestamp::from_unix_millis(1_700_000_000_000).unwrap();
        let later = created.plus_secs(600);

        for status in [
            PaymentStatus::Authorized,
            PaymentStatus::Paid,
            PaymentStatus::Voided,
            PaymentStatus::Refunded,
        ] {
            let mut order = pending_order(created);
            order.payment_status = status;
            assert!(!can_repost(&order, later), "{:?} should not repost", status);
        }
    }

    #[test]
    fn clock_behind_creation_cannot_repost() {
        let created = Timestamp::from_unix_millis(1_700_000_000_000).unwrap();
        let order = pending_order(created);

        assert!(!can_repost(&order, created.plus_secs(-120)));
    }
}
