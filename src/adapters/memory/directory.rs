//! In-memory store directory (countries, states/provinces, currencies).

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{CountryId, CurrencyId, DomainError, StateProvinceId};
use crate::domain::order::{Country, Currency, StateProvince};
use crate::ports::DirectoryReader;

/// Thread-safe in-memory directory data.
#[derive(Default)]
pub struct InMemoryDirectory {
    countries: RwLock<HashMap<CountryId, Country>>,
    state_provinces: RwLock<HashMap<StateProvinceId, StateProvince>>,
    currencies: RwLock<HashMap<CurrencyId, Currency>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_country(&self, country: Country) {
        self.countries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(country.id, country);
    }

    pub fn insert_state_province(&self, state: StateProvince) {
        self.state_provinces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(state.id, state);
    }

    pub fn insert_currency(&self, currency: Currency) {
        self.currencies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(currency.id, currency);
    }
}

#[async_trait]
impl DirectoryReader for InMemoryDirectory {
    async fn find_country(&self, id: &CountryId) -> Result<Option<Country>, DomainError> {
        let countries = self.countries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(countries.get(id).cloned())
    }

    async fn find_state_province(
        &self,
        id: &StateProvinceId,
    ) -> Result<Option<StateProvince>, DomainError> {
        let states = self.state_provinces.read().unwrap_or_else(PoisonError::into_inner);
        Ok(states.get(id).cloned())
    }

    async fn find_currency(&self, id: &CurrencyId) -> Result<Option<Currency>, DomainError> {
        let currencies = self.currencies.read().unwrap_or_else(PoisonError::into_inner);
        Ok(currencies.get(id).cloned())
    }
}
