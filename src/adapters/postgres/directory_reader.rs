//! PostgreSQL implementation of DirectoryReader.

use crate::domain::foundation::{CountryId, CurrencyId, DomainError, StateProvinceId};
use crate::domain::order::{Country, Currency, StateProvince};
use crate::ports::DirectoryReader;
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL implementation of the DirectoryReader port.
pub struct PostgresDirectoryReader {
    pool: PgPool,
}

impl PostgresDirectoryReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CountryRow {
    id: i32,
    name: String,
    two_letter_iso_code: String,
}

#[derive(Debug, sqlx::FromRow)]
struct StateProvinceRow {
    id: i32,
    country_id: i32,
    name: String,
    abbreviation: String,
}

#[derive(Debug, sqlx::FromRow)]
struct CurrencyRow {
    id: i32,
    currency_code: String,
    name: String,
}

#[async_trait]
impl DirectoryReader for PostgresDirectoryReader {
    async fn find_country(&self, id: &CountryId) -> Result<Option<Country>, DomainError> {
        let row: Option<CountryRow> = sqlx::query_as(
            "SELECT id, name, two_letter_iso_code FROM countries WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find country: {}", e)))?;

        row.map(|r| -> Result<Country, DomainError> {
            Ok(Country {
                id: CountryId::new(r.id)?,
                name: r.name,
                two_letter_iso_code: r.two_letter_iso_code,
            })
        })
        .transpose()
    }

    async fn find_state_province(
        &self,
        id: &StateProvinceId,
    ) -> Result<Option<StateProvince>, DomainError> {
        let row: Option<StateProvinceRow> = sqlx::query_as(
            "SELECT id, country_id, name, abbreviation FROM state_provinces WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find state/province: {}", e)))?;

        row.map(|r| -> Result<StateProvince, DomainError> {
            Ok(StateProvince {
                id: StateProvinceId::new(r.id)?,
                country_id: CountryId::new(r.country_id)?,
                name: r.name,
                abbreviation: r.abbreviation,
            })
        })
        .transpose()
    }

    async fn find_currency(&self, id: &CurrencyId) -> Result<Option<Currency>, DomainError> {
        let row: Option<CurrencyRow> =
            sqlx::query_as("SELECT id, currency_code, name FROM currencies WHERE id = $1")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find currency: {}", e)))?;

        row.map(|r| -> Result<Currency, DomainError> {
            Ok(Currency {
                id: CurrencyId::new(r.id)?,
                code: r.currency_code,
                name: r.name,
            })
        })
        .transpose()
    }
}
