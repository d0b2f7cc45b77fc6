//! In-memory order store.
//!
//! Used for development without a database and by integration tests.
//! Implements both `OrderRepository` and `AddressReader`, since orders and
//! their addresses are seeded together.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::{AddressId, DomainError, OrderId, Timestamp};
use crate::domain::order::{Address, Order};
use crate::ports::{AddressReader, OrderRepository};

/// Thread-safe in-memory orders and addresses.
///
/// The authorization guard and transition run under one lock, so concurrent
/// notifications for the same order authorize it once.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<HashMap<OrderId, Order>>,
    addresses: Mutex<HashMap<AddressId, Address>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an order.
    pub fn insert_order(&self, order: Order) {
        self.orders().insert(order.id, order);
    }

    /// Inserts or replaces an address. Addresses without an id are ignored.
    pub fn insert_address(&self, address: Address) {
        if let Some(id) = address.id {
            self.addresses().insert(id, address);
        }
    }

    /// Returns a snapshot of an order.
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders().get(id).cloned()
    }

    pub fn order_count(&self) -> usize {
        self.orders().len()
    }

    // A panicked writer cannot leave an order half-updated, so a poisoned
    // lock still guards consistent data.
    fn orders(&self) -> MutexGuard<'_, HashMap<OrderId, Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn addresses(&self) -> MutexGuard<'_, HashMap<AddressId, Address>> {
        self.addresses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderStore {
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.order(id))
    }

    async fn mark_as_authorized(&self, id: &OrderId, at: Timestamp) -> Result<bool, DomainError> {
        let mut orders = self.orders();
        match orders.get_mut(id) {
            Some(order) if order.can_mark_as_authorized() => {
                order.mark_as_authorized(at)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl AddressReader for InMemoryOrderStore {
    async fn find_by_id(&self, id: &AddressId) -> Result<Option<Address>, DomainError> {
        Ok(self.addresses().get(id).cloned())
    }
}
