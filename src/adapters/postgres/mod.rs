//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed store data:
//! - `PostgresOrderRepository` - Order lookup and conditional authorization
//! - `PostgresAddressReader` - Customer addresses
//! - `PostgresDirectoryReader` - Countries, states/provinces and currencies

mod address_reader;
mod directory_reader;
mod order_repository;

pub use address_reader::PostgresAddressReader;
pub use directory_reader::PostgresDirectoryReader;
pub use order_repository::PostgresOrderRepository;
