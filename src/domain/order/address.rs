//! Address and store directory entities (countries, states, currencies).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AddressId, CountryId, CurrencyId, StateProvinceId};

/// A billing or shipping address attached to an order.
///
/// Text fields the customer left blank are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Option<AddressId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address1: String,
    pub city: String,
    pub zip_postal_code: String,
    pub phone_number: String,
    pub country_id: Option<CountryId>,
    pub state_province_id: Option<StateProvinceId>,
}

/// A country from the store directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    /// ISO 3166-1 alpha-2 code, e.g. `US`.
    pub two_letter_iso_code: String,
}

/// A state or province from the store directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateProvince {
    pub id: StateProvinceId,
    pub country_id: CountryId,
    pub name: String,
    /// Postal abbreviation, e.g. `CA`.
    pub abbreviation: String,
}

/// A currency the store accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: CurrencyId,
    /// ISO 4217 code, e.g. `USD`.
    pub code: String,
    pub name: String,
}
