//! In-memory adapters for development and tests.
//!
//! - `InMemoryOrderStore` - Orders and addresses
//! - `InMemoryDirectory` - Countries, states/provinces and currencies

mod directory;
mod order_store;

pub use directory::InMemoryDirectory;
pub use order_store::InMemoryOrderStore;
