//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum endpoints for the gateway and the shopper
//! - `memory` - In-memory store data for development and tests
//! - `postgres` - PostgreSQL store data

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryDirectory, InMemoryOrderStore};
pub use postgres::{PostgresAddressReader, PostgresDirectoryReader, PostgresOrderRepository};
