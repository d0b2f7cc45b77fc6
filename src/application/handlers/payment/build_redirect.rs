//! BuildRedirectHandler - Query handler producing the gateway redirect form.

use std::sync::Arc;

use tracing::debug;

use crate::application::PaymentSettings;
use crate::domain::foundation::{OrderId, Timestamp};
use crate::domain::hosted_payment::{
    HostedOrderRequest, HostedPaymentError, RedirectForm, ResolvedAddress,
};
use crate::domain::order::Address;
use crate::ports::{AddressReader, DirectoryReader, OrderRepository};

/// Query for the redirect form of a placed order.
#[derive(Debug, Clone)]
pub struct BuildRedirectQuery {
    pub order_id: OrderId,
}

/// Handler that resolves order data and builds the signed redirect form.
///
/// Fails fast when the order, its billing address, a required shipping
/// address or the primary store currency cannot be found.
pub struct BuildRedirectHandler {
    settings: Arc<PaymentSettings>,
    orders: Arc<dyn OrderRepository>,
    addresses: Arc<dyn AddressReader>,
    directory: Arc<dyn DirectoryReader>,
}

impl BuildRedirectHandler {
    pub fn new(
        settings: Arc<PaymentSettings>,
        orders: Arc<dyn OrderRepository>,
        addresses: Arc<dyn AddressReader>,
        directory: Arc<dyn DirectoryReader>,
    ) -> Self {
        Self {
            settings,
            orders,
            addresses,
            directory,
        }
    }

    pub async fn handle(&self, query: BuildRedirectQuery) -> Result<RedirectForm, HostedPaymentError> {
        let order_id = query.order_id;

        let order = self
            .orders
            .find_by_id(&order_id)
            .await?
            .ok_or(HostedPaymentError::OrderNotFound(order_id))?;

        let billing = self
            .addresses
            .find_by_id(&order.billing_address_id)
            .await?
            .ok_or(HostedPaymentError::AddressNotFound(order_id, "billing"))?;
        let bill_to = self.resolve(billing).await?;

        let ship_to = if order.shipping_status.requires_shipping() {
            let shipping_id = order
                .shipping_address_id
                .ok_or(HostedPaymentError::AddressNotFound(order_id, "shipping"))?;
            let shipping = self
                .addresses
                .find_by_id(&shipping_id)
                .await?
                .ok_or(HostedPaymentError::AddressNotFound(order_id, "shipping"))?;
            Some(self.resolve(shipping).await?)
        } else {
            None
        };

        let currency_id = self.settings.primary_currency_id;
        let currency = self
            .directory
            .find_currency(&currency_id)
            .await?
            .ok_or(HostedPaymentError::CurrencyNotFound(currency_id.value()))?;

        let form = HostedOrderRequest {
            credentials: &self.settings.credentials,
            order: &order,
            currency_code: &currency.code,
            bill_to: &bill_to,
            ship_to: ship_to.as_ref(),
            store_location: &self.settings.store_location,
            timestamp: Timestamp::now(),
        }
        .build_redirect();

        debug!(
            order_id = %order_id,
            field_count = form.fields.len(),
            "Built hosted order page redirect"
        );

        Ok(form)
    }

    /// Looks up the country code and state abbreviation of an address.
    async fn resolve(&self, address: Address) -> Result<ResolvedAddress, HostedPaymentError> {
        let country_code = match &address.country_id {
            Some(id) => self
                .directory
                .find_country(id)
                .await?
                .map(|country| country.two_letter_iso_code),
            None => None,
        };

        let state_abbreviation = match &address.state_province_id {
            Some(id) => self
                .directory
                .find_state_province(id)
                .await?
                .map(|state| state.abbreviation),
            None => None,
        };

        Ok(ResolvedAddress {
            address,
            country_code,
            state_abbreviation,
        })
    }
}
