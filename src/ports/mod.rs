//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Data Ports
//!
//! - `OrderRepository` - Order lookup and the atomic Pending -> Authorized write
//! - `AddressReader` - Billing and shipping addresses
//! - `DirectoryReader` - Countries, states/provinces and currencies
//!
//! ## Driving Ports
//!
//! - `PaymentMethod` - Contract the store checkout calls

mod address_reader;
mod directory_reader;
mod order_repository;
mod payment_method;

pub use address_reader::AddressReader;
pub use directory_reader::DirectoryReader;
pub use order_repository::OrderRepository;
pub use payment_method::PaymentMethod;
