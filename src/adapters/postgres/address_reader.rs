//! PostgreSQL implementation of AddressReader.

use crate::domain::foundation::{AddressId, CountryId, DomainError, StateProvinceId};
use crate::domain::order::Address;
use crate::ports::AddressReader;
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL implementation of the AddressReader port.
pub struct PostgresAddressReader {
    pool: PgPool,
}

impl PostgresAddressReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddressRow {
    id: i32,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    address1: Option<String>,
    city: Option<String>,
    zip_postal_code: Option<String>,
    phone_number: Option<String>,
    country_id: Option<i32>,
    state_province_id: Option<i32>,
}

impl TryFrom<AddressRow> for Address {
    type Error = DomainError;

    fn try_from(row: AddressRow) -> Result<Self, Self::Error> {
        Ok(Address {
            id: Some(AddressId::new(row.id)?),
            first_name: row.first_name.unwrap_or_default(),
            last_name: row.last_name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            address1: row.address1.unwrap_or_default(),
            city: row.city.unwrap_or_default(),
            zip_postal_code: row.zip_postal_code.unwrap_or_default(),
            phone_number: row.phone_number.unwrap_or_default(),
            // Zero is how the store records "none selected".
            country_id: row.country_id.filter(|id| *id > 0).map(CountryId::new).transpose()?,
            state_province_id: row
                .state_province_id
                .filter(|id| *id > 0)
                .map(StateProvinceId::new)
                .transpose()?,
        })
    }
}

#[async_trait]
impl AddressReader for PostgresAddressReader {
    async fn find_by_id(&self, id: &AddressId) -> Result<Option<Address>, DomainError> {
        let row: Option<AddressRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email, address1, city, zip_postal_code,
                   phone_number, country_id, state_province_id
            FROM addresses
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find address: {}", e)))?;

        row.map(Address::try_from).transpose()
    }
}
