//! Hosted order page gateway configuration

use bigdecimal::{BigDecimal, Zero};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::hosted_payment::GatewayCredentials;

/// Merchant account and gateway endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Form action of the hosted order page
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    pub merchant_id: String,

    /// Shared HMAC secret issued with the merchant account
    pub public_key: SecretString,

    pub serial_number: String,

    /// Fee added when the shopper picks this payment method
    #[serde(default)]
    pub additional_fee: BigDecimal,
}

impl GatewayConfig {
    /// Builds the credentials used for signing and verification.
    pub fn to_credentials(&self) -> GatewayCredentials {
        GatewayCredentials::new(
            self.gateway_url.clone(),
            self.merchant_id.clone(),
            self.public_key.expose_secret().clone(),
            self.serial_number.clone(),
        )
    }

    /// Validate gateway configuration
    ///
    /// Production requires an HTTPS form action.
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.merchant_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__MERCHANT_ID"));
        }
        if self.public_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__PUBLIC_KEY"));
        }
        if self.serial_number.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__SERIAL_NUMBER"));
        }
        if !self.gateway_url.starts_with("https://") && !self.gateway_url.starts_with("http://") {
            return Err(ValidationError::InvalidGatewayUrl);
        }
        if production && !self.gateway_url.starts_with("https://") {
            return Err(ValidationError::GatewayUrlMustBeHttps);
        }
        if self.additional_fee < BigDecimal::zero() {
            return Err(ValidationError::NegativeAdditionalFee);
        }
        Ok(())
    }
}

fn default_gateway_url() -> String {
    "https://orderpagetest.ic3.com/hop/orderform.jsp".to_string()
}
