//! Merchant credentials for the hosted order page.

use secrecy::{ExposeSecret, SecretString};

/// Merchant account details issued by the gateway.
///
/// Immutable once built. The shared secret is only reachable through
/// [`GatewayCredentials::public_key`] and never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct GatewayCredentials {
    /// Form action URL of the hosted order page.
    gateway_url: String,

    merchant_id: String,

    /// Shared HMAC secret. The gateway calls it the "public key".
    public_key: SecretString,

    serial_number: String,
}

impl GatewayCredentials {
    pub fn new(
        gateway_url: impl Into<String>,
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        serial_number: impl Into<String>,
    ) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            merchant_id: merchant_id.into(),
            public_key: SecretString::new(public_key.into()),
            serial_number: serial_number.into(),
        }
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Exposes the shared secret for signing.
    pub fn public_key(&self) -> &str {
        self.public_key.expose_secret()
    }
}
