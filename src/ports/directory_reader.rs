//! Store directory reader port (countries, states, currencies).
//!
//! Lookups that find nothing return `None`; callers decide whether a missing
//! entry is an error. A missing country only drops a form field, while a
//! missing primary currency stops the checkout redirect.

use crate::domain::foundation::{CountryId, CurrencyId, DomainError, StateProvinceId};
use crate::domain::order::{Country, Currency, StateProvince};
use async_trait::async_trait;

/// Read-only access to store directory data.
#[async_trait]
pub trait DirectoryReader: Send + Sync {
    async fn find_country(&self, id: &CountryId) -> Result<Option<Country>, DomainError>;

    async fn find_state_province(
        &self,
        id: &StateProvinceId,
    ) -> Result<Option<StateProvince>, DomainError>;

    async fn find_currency(&self, id: &CurrencyId) -> Result<Option<Currency>, DomainError>;
}
