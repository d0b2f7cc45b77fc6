//! Address reader port.

use crate::domain::foundation::{AddressId, DomainError};
use crate::domain::order::Address;
use async_trait::async_trait;

/// Read-only access to customer addresses.
#[async_trait]
pub trait AddressReader: Send + Sync {
    /// Find an address by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AddressId) -> Result<Option<Address>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn AddressReader) {}
    }
}
