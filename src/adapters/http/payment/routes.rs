//! Axum router configuration for hosted order page endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers::{
    check_repost, handle_ipn, health, payment_info, redirect_to_gateway, PaymentAppState,
};

/// Largest IPN body accepted. Gateway notifications carry a few dozen fields.
pub const IPN_BODY_LIMIT: usize = 64 * 1024;

/// Create the payment plugin router.
///
/// # Routes
///
/// ## Gateway Callback (no auth, signature verified)
/// - `POST /IPNHandler` - Payment notification, body capped at [`IPN_BODY_LIMIT`]
///
/// ## Shopper Endpoints
/// - `GET /Redirect/:order_id` - Auto-submitting gateway form
/// - `GET /RePost/:order_id` - Re-post eligibility
/// - `GET /PaymentInfo` - Payment method description
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route(
            "/IPNHandler",
            post(handle_ipn).layer(DefaultBodyLimit::max(IPN_BODY_LIMIT)),
        )
        .route("/Redirect/:order_id", get(redirect_to_gateway))
        .route("/RePost/:order_id", get(check_repost))
        .route("/PaymentInfo", get(payment_info))
}

/// Create the complete application router.
///
/// Mounts the plugin routes at `/Plugins/PaymentCyberSource` plus `/health`.
///
/// # Example
///
/// ```ignore
/// let app = payment_router().with_state(app_state);
/// axum::serve(listener, app).await?;
/// ```
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new()
        .nest("/Plugins/PaymentCyberSource", payment_routes())
        .route("/health", get(health))
}
