//! What the hosted order page payment method can and cannot do.

use serde::Serialize;

use crate::domain::order::PaymentStatus;

pub const CAPTURE_NOT_SUPPORTED: &str = "Capture method not supported";
pub const REFUND_NOT_SUPPORTED: &str = "Refund method not supported";
pub const VOID_NOT_SUPPORTED: &str = "Void method not supported";
/// Used for both processing and cancelling recurring payments.
pub const RECURRING_NOT_SUPPORTED: &str = "Recurring payment not supported";

/// Shown to the shopper when choosing this payment method.
pub const PAYMENT_METHOD_DESCRIPTION: &str =
    "You will be redirected to CyberSource site to complete the order.";

/// Recurring billing support level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringPaymentType {
    NotSupported,
    Manual,
    Automatic,
}

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    /// Card details entered on the store's own checkout page.
    Standard,
    /// Shopper is sent to an external page to pay.
    Redirection,
    Button,
}

/// Static feature flags of a payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentMethodCapabilities {
    pub supports_capture: bool,
    pub supports_partial_refund: bool,
    pub supports_refund: bool,
    pub supports_void: bool,
    pub recurring_payment_type: RecurringPaymentType,
    pub payment_method_type: PaymentMethodType,
    pub skip_payment_info: bool,
}

impl PaymentMethodCapabilities {
    /// Capabilities of the hosted order page: redirect only, nothing after.
    pub fn hosted_order_page() -> Self {
        Self {
            supports_capture: false,
            supports_partial_refund: false,
            supports_refund: false,
            supports_void: false,
            recurring_payment_type: RecurringPaymentType::NotSupported,
            payment_method_type: PaymentMethodType::Redirection,
            skip_payment_info: false,
        }
    }
}

/// Result of a payment operation.
///
/// Failure is reported through `errors`; operations never return `Err` for
/// business outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    /// Payment status the order should move to, if any.
    pub new_payment_status: Option<PaymentStatus>,
    pub errors: Vec<String>,
}

impl OperationResult {
    pub fn success() -> Self {
        Self::default()
    }

    /// Successful result that moves the payment to `status`.
    pub fn with_status(status: PaymentStatus) -> Self {
        Self {
            new_payment_status: Some(status),
            errors: Vec::new(),
        }
    }

    /// Result carrying a single error.
    pub fn unsupported(message: &str) -> Self {
        Self {
            new_payment_status: None,
            errors: vec![message.to_string()],
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
