//! Order repository port.
//!
//! Orders belong to the store. This port exposes the one read and the one
//! write the hosted payment flow needs.
//!
//! # Design
//!
//! - **Read by id**: Notifications reference orders by their integer id
//! - **Atomic authorization**: The guard and the transition happen in one step,
//!   so two concurrent notifications cannot both authorize an order

use crate::domain::foundation::{DomainError, OrderId, Timestamp};
use crate::domain::order::Order;
use async_trait::async_trait;

/// Repository port for store orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Moves an order from `Pending` to `Authorized` if it still qualifies.
    ///
    /// Qualifies means [`Order::can_mark_as_authorized`] holds at the moment
    /// of the write. Returns `true` if this call performed the transition and
    /// `false` if the order was missing or no longer qualified.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn mark_as_authorized(&self, id: &OrderId, at: Timestamp) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn order_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OrderRepository) {}
    }
}
