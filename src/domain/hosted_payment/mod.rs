//! Hosted order page payment domain.
//!
//! Signs the checkout form posted to the gateway and verifies the
//! notification the gateway posts back.
//!
//! # Module Structure
//!
//! - `fields` - Outbound field names and the ordered field set
//! - `signature` - HMAC-SHA1 signing and constant-time verification
//! - `credentials` - Merchant credentials with a redacted secret
//! - `request` - Outbound request builder and redirect form
//! - `notification` - Inbound notification and its verification
//! - `repost` - Re-post eligibility rule
//! - `capabilities` - Payment method feature flags and operation results
//! - `errors` - HostedPaymentError

mod capabilities;
mod credentials;
mod errors;
mod fields;
mod notification;
mod repost;
mod request;
mod signature;

pub use capabilities::{
    OperationResult, PaymentMethodCapabilities, PaymentMethodType, RecurringPaymentType,
    CAPTURE_NOT_SUPPORTED, PAYMENT_METHOD_DESCRIPTION, RECURRING_NOT_SUPPORTED,
    REFUND_NOT_SUPPORTED, VOID_NOT_SUPPORTED,
};
pub use credentials::GatewayCredentials;
pub use errors::HostedPaymentError;
pub use fields::{FieldName, OutboundFieldSet};
pub use notification::{
    verify, InboundNotification, InvalidSignature, Verification, APPROVED_REASON_CODE,
    ORDER_NUMBER, REASON_CODE, SIGNED_FIELDS, TRANSACTION_SIGNATURE,
};
pub use repost::{can_repost, REPOST_MIN_AGE_SECS};
pub use request::{
    HostedOrderRequest, RedirectForm, ResolvedAddress, FORM_NAME, ORDER_PAGE_VERSION,
    RECEIPT_LINK_TEXT, TRANSACTION_TYPE,
};
pub use signature::{
    request_signature_message, sign, sign_request, verify_signature, REQUEST_SIGNATURE_FIELDS,
};
