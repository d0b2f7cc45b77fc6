//! Order domain module.
//!
//! The store's order, address and directory entities, limited to what the
//! hosted payment flow reads.
//!
//! # Module Structure
//!
//! - `aggregate` - Order aggregate and its authorization guard
//! - `status` - PaymentStatus state machine, OrderStatus, ShippingStatus
//! - `address` - Address, Country, StateProvince, Currency

mod address;
mod aggregate;
mod status;

pub use address::{Address, Country, Currency, StateProvince};
pub use aggregate::Order;
pub use status::{OrderStatus, PaymentStatus, ShippingStatus};
