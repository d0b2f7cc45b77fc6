//! Hosted order page implementation of the `PaymentMethod` port.

use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use super::handlers::{BuildRedirectHandler, BuildRedirectQuery};
use super::PaymentSettings;
use crate::domain::foundation::{OrderId, Timestamp};
use crate::domain::hosted_payment::{
    can_repost, HostedPaymentError, OperationResult, PaymentMethodCapabilities, RedirectForm,
    CAPTURE_NOT_SUPPORTED, PAYMENT_METHOD_DESCRIPTION, RECURRING_NOT_SUPPORTED,
    REFUND_NOT_SUPPORTED, VOID_NOT_SUPPORTED,
};
use crate::domain::order::{Order, PaymentStatus};
use crate::ports::{AddressReader, DirectoryReader, OrderRepository, PaymentMethod};

/// Redirect-based payment method backed by the hosted order page.
///
/// Placing an order leaves it pending; the gateway notification authorizes
/// it later. Capture, refund, void and recurring billing are not offered.
pub struct CyberSourcePaymentMethod {
    settings: Arc<PaymentSettings>,
    redirect: BuildRedirectHandler,
}

impl CyberSourcePaymentMethod {
    pub fn new(
        settings: Arc<PaymentSettings>,
        orders: Arc<dyn OrderRepository>,
        addresses: Arc<dyn AddressReader>,
        directory: Arc<dyn DirectoryReader>,
    ) -> Self {
        let redirect = BuildRedirectHandler::new(settings.clone(), orders, addresses, directory);
        Self { settings, redirect }
    }
}

#[async_trait]
impl PaymentMethod for CyberSourcePaymentMethod {
    async fn process_payment(&self, _order_id: &OrderId) -> OperationResult {
        OperationResult::with_status(PaymentStatus::Pending)
    }

    async fn post_process_payment(
        &self,
        order_id: &OrderId,
    ) -> Result<RedirectForm, HostedPaymentError> {
        self.redirect
            .handle(BuildRedirectQuery {
                order_id: *order_id,
            })
            .await
    }

    fn additional_handling_fee(&self) -> BigDecimal {
        self.settings.additional_fee.clone()
    }

    async fn capture(&self, _order_id: &OrderId) -> OperationResult {
        OperationResult::unsupported(CAPTURE_NOT_SUPPORTED)
    }

    async fn refund(&self, _order_id: &OrderId, _amount: &BigDecimal) -> OperationResult {
        OperationResult::unsupported(REFUND_NOT_SUPPORTED)
    }

    async fn void(&self, _order_id: &OrderId) -> OperationResult {
        OperationResult::unsupported(VOID_NOT_SUPPORTED)
    }

    async fn process_recurring_payment(&self, _order_id: &OrderId) -> OperationResult {
        OperationResult::unsupported(RECURRING_NOT_SUPPORTED)
    }

    async fn cancel_recurring_payment(&self, _order_id: &OrderId) -> OperationResult {
        OperationResult::unsupported(RECURRING_NOT_SUPPORTED)
    }

    fn can_repost_process_payment(
        &self,
        order: Option<&Order>,
    ) -> Result<bool, HostedPaymentError> {
        let order = order.ok_or(HostedPaymentError::InvalidArgument("order"))?;
        Ok(can_repost(order, Timestamp::now()))
    }

    fn capabilities(&self) -> PaymentMethodCapabilities {
        PaymentMethodCapabilities::hosted_order_page()
    }

    fn description(&self) -> &str {
        PAYMENT_METHOD_DESCRIPTION
    }

    fn configuration_page_url(&self) -> String {
        self.settings.configuration_page_url()
    }

    fn hide_payment_method(&self) -> bool {
        false
    }

    fn validate_payment_form(&self, _form: &[(String, String)]) -> Vec<String> {
        Vec::new()
    }
}
