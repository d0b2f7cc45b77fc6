//! Payment method port (driving side).
//!
//! The store's checkout calls a payment method through this contract. The
//! hosted order page implementation redirects the shopper and relies on the
//! gateway notification to authorize the order later.

use crate::domain::foundation::OrderId;
use crate::domain::hosted_payment::{
    HostedPaymentError, OperationResult, PaymentMethodCapabilities, RedirectForm,
};
use crate::domain::order::Order;
use async_trait::async_trait;
use bigdecimal::BigDecimal;

/// Contract between the store checkout and a payment method.
#[async_trait]
pub trait PaymentMethod: Send + Sync {
    /// Called when the order is placed, before any redirect.
    async fn process_payment(&self, order_id: &OrderId) -> OperationResult;

    /// Called after the order is placed. Returns the form the browser posts
    /// to the external payment page.
    ///
    /// # Errors
    ///
    /// - `OrderNotFound`, `AddressNotFound`, `CurrencyNotFound` for missing store data
    /// - `Infrastructure` on collaborator failure
    async fn post_process_payment(&self, order_id: &OrderId)
        -> Result<RedirectForm, HostedPaymentError>;

    /// Fee added to the order total when this method is chosen.
    fn additional_handling_fee(&self) -> BigDecimal;

    async fn capture(&self, order_id: &OrderId) -> OperationResult;

    async fn refund(&self, order_id: &OrderId, amount: &BigDecimal) -> OperationResult;

    async fn void(&self, order_id: &OrderId) -> OperationResult;

    async fn process_recurring_payment(&self, order_id: &OrderId) -> OperationResult;

    async fn cancel_recurring_payment(&self, order_id: &OrderId) -> OperationResult;

    /// Whether the shopper may retry the redirect for a placed order.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when `order` is `None`
    fn can_repost_process_payment(&self, order: Option<&Order>)
        -> Result<bool, HostedPaymentError>;

    fn capabilities(&self) -> PaymentMethodCapabilities;

    /// Text shown to the shopper on the payment method list.
    fn description(&self) -> &str;

    /// Admin page where the method is configured.
    fn configuration_page_url(&self) -> String;

    fn hide_payment_method(&self) -> bool;

    /// Validates the checkout payment form. Returns warnings; empty means valid.
    fn validate_payment_form(&self, form: &[(String, String)]) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_is_object_safe() {
        fn _accepts_dyn(_method: &dyn PaymentMethod) {}
    }
}
