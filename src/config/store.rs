//! Store configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::CurrencyId;

/// Where the store is served and what it charges in.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Host name, optionally with port, e.g. `shop.example.com`
    pub host: String,

    #[serde(default = "default_ssl_enabled")]
    pub ssl_enabled: bool,

    /// Directory id of the currency every order is charged in
    #[serde(default = "default_primary_currency_id")]
    pub primary_currency_id: i32,
}

impl StoreConfig {
    pub fn primary_currency_id(&self) -> Result<CurrencyId, ValidationError> {
        CurrencyId::new(self.primary_currency_id).map_err(|_| ValidationError::InvalidCurrencyId)
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORE__HOST"));
        }
        self.primary_currency_id()?;
        Ok(())
    }
}

fn default_ssl_enabled() -> bool {
    true
}

fn default_primary_currency_id() -> i32 {
    1
}
