//! Outbound hosted order page request.
//!
//! [`HostedOrderRequest`] gathers everything needed to build the form posted
//! to the gateway. Resolution of addresses, countries and currency happens
//! in the application layer; building here is pure and infallible.

use super::credentials::GatewayCredentials;
use super::fields::{FieldName, OutboundFieldSet};
use super::signature::sign_request;
use crate::domain::foundation::{format_two_decimals, Timestamp};
use crate::domain::order::{Address, Order};

/// Transaction type requested from the gateway.
pub const TRANSACTION_TYPE: &str = "authorization";

/// Hosted order page protocol version.
pub const ORDER_PAGE_VERSION: &str = "4";

/// Link text shown on the gateway receipt page.
pub const RECEIPT_LINK_TEXT: &str = "Return";

/// Name of the rendered HTML form.
pub const FORM_NAME: &str = "CyberSource";

/// An address with its directory lookups already resolved.
///
/// `country_code` and `state_abbreviation` are `None` when the address has
/// no country or state, or when the lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub address: Address,
    pub country_code: Option<String>,
    pub state_abbreviation: Option<String>,
}

impl ResolvedAddress {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            country_code: None,
            state_abbreviation: None,
        }
    }

    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn with_state_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.state_abbreviation = Some(abbreviation.into());
        self
    }
}

/// Inputs for one checkout redirect.
#[derive(Debug)]
pub struct HostedOrderRequest<'a> {
    pub credentials: &'a GatewayCredentials,
    pub order: &'a Order,
    /// ISO code of the store's primary currency.
    pub currency_code: &'a str,
    pub bill_to: &'a ResolvedAddress,
    /// Only used when the order requires shipping.
    pub ship_to: Option<&'a ResolvedAddress>,
    /// Non-secure store root URL, ending in `/`.
    pub store_location: &'a str,
    /// Becomes `orderPage_timestamp`.
    pub timestamp: Timestamp,
}

impl HostedOrderRequest<'_> {
    /// Builds the ordered, signed field set.
    ///
    /// `orderPage_signaturePublic` is always the last field.
    pub fn build_fields(&self) -> OutboundFieldSet {
        let credentials = self.credentials;
        let mut fields = OutboundFieldSet::new();

        fields.insert(FieldName::MerchantId, credentials.merchant_id());
        fields.insert(
            FieldName::OrderPageTimestamp,
            self.timestamp.as_unix_millis().to_string(),
        );
        fields.insert(FieldName::OrderPageTransactionType, TRANSACTION_TYPE);
        fields.insert(FieldName::OrderPageVersion, ORDER_PAGE_VERSION);
        fields.insert(FieldName::OrderPageSerialNumber, credentials.serial_number());

        fields.insert(FieldName::Amount, format_two_decimals(&self.order.order_total));
        fields.insert(FieldName::Currency, self.currency_code);
        fields.insert(FieldName::OrderNumber, self.order.id.to_string());

        let bill = &self.bill_to.address;
        fields.insert(FieldName::BillToFirstName, bill.first_name.as_str());
        fields.insert(FieldName::BillToLastName, bill.last_name.as_str());
        fields.insert(FieldName::BillToStreet1, bill.address1.as_str());
        if let Some(code) = &self.bill_to.country_code {
            fields.insert(FieldName::BillToCountry, code.as_str());
        }
        if let Some(abbreviation) = &self.bill_to.state_abbreviation {
            fields.insert(FieldName::BillToState, abbreviation.as_str());
        }
        fields.insert(FieldName::BillToCity, bill.city.as_str());
        fields.insert(FieldName::BillToPostalCode, bill.zip_postal_code.as_str());
        fields.insert(FieldName::BillToPhoneNumber, bill.phone_number.as_str());
        fields.insert(FieldName::BillToEmail, bill.email.as_str());

        if self.order.shipping_status.requires_shipping() {
            if let Some(ship_to) = self.ship_to {
                let ship = &ship_to.address;
                fields.insert(FieldName::ShipToFirstName, ship.first_name.as_str());
                fields.insert(FieldName::ShipToLastName, ship.last_name.as_str());
                fields.insert(FieldName::ShipToStreet1, ship.address1.as_str());
                if let Some(code) = &ship_to.country_code {
                    fields.insert(FieldName::ShipToCountry, code.as_str());
                }
                if let Some(abbreviation) = &ship_to.state_abbreviation {
                    fields.insert(FieldName::ShipToState, abbreviation.as_str());
                }
                fields.insert(FieldName::ShipToCity, ship.city.as_str());
                fields.insert(FieldName::ShipToPostalCode, ship.zip_postal_code.as_str());
            }
        }

        fields.insert(
            FieldName::OrderPageReceiptResponseUrl,
            format!("{}checkout/completed", self.store_location),
        );
        fields.insert(FieldName::OrderPageReceiptLinkText, RECEIPT_LINK_TEXT);

        let signature = sign_request(&fields, credentials.public_key());
        fields.insert(FieldName::OrderPageSignaturePublic, signature);

        fields
    }

    /// Builds the redirect form the browser auto-submits to the gateway.
    pub fn build_redirect(&self) -> RedirectForm {
        RedirectForm {
            form_name: FORM_NAME.to_string(),
            action: self.credentials.gateway_url().to_string(),
            method: "POST".to_string(),
            fields: self.build_fields(),
        }
    }
}

/// A form the browser posts to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectForm {
    pub form_name: String,
    pub action: String,
    pub method: String,
    pub fields: OutboundFieldSet,
}

impl RedirectForm {
    /// Wire-named fields in post order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        self.fields.to_pairs()
    }
}
