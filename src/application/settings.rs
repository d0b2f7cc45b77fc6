//! Runtime settings of the hosted order page payment method.

use bigdecimal::BigDecimal;

use crate::domain::foundation::CurrencyId;
use crate::domain::hosted_payment::GatewayCredentials;

/// Settings shared by the payment handlers.
///
/// Built once from configuration at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PaymentSettings {
    pub credentials: GatewayCredentials,
    /// Added to the order total when this method is chosen.
    pub additional_fee: BigDecimal,
    /// Store root over plain HTTP, ending in `/`. Used for the receipt URL.
    pub store_location: String,
    /// Store root using HTTPS when the store has SSL enabled, ending in `/`.
    pub secure_store_location: String,
    pub primary_currency_id: CurrencyId,
}

impl PaymentSettings {
    /// Derives both store locations from a host name.
    pub fn new(
        credentials: GatewayCredentials,
        additional_fee: BigDecimal,
        store_host: &str,
        ssl_enabled: bool,
        primary_currency_id: CurrencyId,
    ) -> Self {
        let host = store_host.trim_end_matches('/');
        let store_location = format!("http://{}/", host);
        let secure_store_location = if ssl_enabled {
            format!("https://{}/", host)
        } else {
            store_location.clone()
        };

        Self {
            credentials,
            additional_fee,
            store_location,
            secure_store_location,
            primary_currency_id,
        }
    }

    /// Admin page where the payment method is configured.
    pub fn configuration_page_url(&self) -> String {
        format!("{}Admin/PaymentCyberSource/Configure", self.secure_store_location)
    }
}
