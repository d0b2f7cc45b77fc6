//! HTTP adapter for the hosted order page payment method.
//!
//! Exposes the gateway notification callback, the shopper redirect and the
//! payment method description.

mod dto;
mod handlers;
mod remote_post;
mod routes;

pub use dto::{ErrorResponse, HealthResponse, PaymentInfoResponse, RePostResponse};
pub use handlers::{PaymentApiError, PaymentAppState};
pub use remote_post::render_auto_submit;
pub use routes::{payment_router, payment_routes, IPN_BODY_LIMIT};
