//! HTTP handlers for hosted order page endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Form, Json, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, warn};

use crate::application::{
    CyberSourcePaymentMethod, HandleIpnCommand, HandleIpnHandler, PaymentSettings,
};
use crate::domain::foundation::{format_two_decimals, OrderId};
use crate::domain::hosted_payment::{HostedPaymentError, InboundNotification};
use crate::ports::{AddressReader, DirectoryReader, OrderRepository, PaymentMethod};

use super::dto::{ErrorResponse, HealthResponse, PaymentInfoResponse, RePostResponse};
use super::remote_post::render_auto_submit;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct PaymentAppState {
    pub settings: Arc<PaymentSettings>,
    pub orders: Arc<dyn OrderRepository>,
    pub addresses: Arc<dyn AddressReader>,
    pub directory: Arc<dyn DirectoryReader>,
}

impl PaymentAppState {
    pub fn ipn_handler(&self) -> HandleIpnHandler {
        HandleIpnHandler::new(self.settings.clone(), self.orders.clone())
    }

    pub fn payment_method(&self) -> CyberSourcePaymentMethod {
        CyberSourcePaymentMethod::new(
            self.settings.clone(),
            self.orders.clone(),
            self.addresses.clone(),
            self.directory.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Gateway Callback
// ════════════════════════════════════════════════════════════════════════════════

/// POST /Plugins/PaymentCyberSource/IPNHandler - Gateway payment notification
///
/// Always answers 200 with an empty body, so the gateway does not redeliver
/// forged or irrelevant notifications. Only an infrastructure failure yields
/// 500, which makes the gateway retry.
pub async fn handle_ipn(
    State(state): State<PaymentAppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> StatusCode {
    let pairs = match form {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            warn!(error = %rejection, "IPN body could not be parsed");
            return StatusCode::OK;
        }
    };

    let cmd = HandleIpnCommand {
        notification: InboundNotification::from_pairs(pairs),
    };

    match state.ipn_handler().handle(cmd).await {
        Ok(_) => StatusCode::OK,
        Err(err) if err.is_retryable() => {
            error!(error = %err, "IPN processing failed, gateway will retry");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        Err(err) => {
            warn!(error = %err, "IPN processing failed");
            StatusCode::OK
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Shopper Endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// GET /Plugins/PaymentCyberSource/Redirect/:order_id - Auto-submitting gateway form
pub async fn redirect_to_gateway(
    State(state): State<PaymentAppState>,
    order_id: Result<Path<i32>, PathRejection>,
) -> Result<Html<String>, PaymentApiError> {
    let order_id = parse_order_id(order_id)?;

    let form = state.payment_method().post_process_payment(&order_id).await?;

    Ok(Html(render_auto_submit(&form)))
}

/// GET /Plugins/PaymentCyberSource/RePost/:order_id - Whether the redirect may be retried
pub async fn check_repost(
    State(state): State<PaymentAppState>,
    order_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<RePostResponse>, PaymentApiError> {
    let order_id = parse_order_id(order_id)?;

    let order = state
        .orders
        .find_by_id(&order_id)
        .await
        .map_err(HostedPaymentError::from)?
        .ok_or(HostedPaymentError::OrderNotFound(order_id))?;

    let can_repost = state.payment_method().can_repost_process_payment(Some(&order))?;

    Ok(Json(RePostResponse {
        order_id: order_id.value(),
        can_repost,
    }))
}

/// GET /Plugins/PaymentCyberSource/PaymentInfo - Payment method description
pub async fn payment_info(State(state): State<PaymentAppState>) -> Json<PaymentInfoResponse> {
    let method = state.payment_method();

    Json(PaymentInfoResponse {
        description: method.description().to_string(),
        capabilities: method.capabilities(),
        additional_fee: format_two_decimals(&method.additional_handling_fee()),
        configuration_page_url: method.configuration_page_url(),
        hide_payment_method: method.hide_payment_method(),
    })
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Non-numeric, overflowing and non-positive ids are all the same 400.
fn parse_order_id(raw: Result<Path<i32>, PathRejection>) -> Result<OrderId, PaymentApiError> {
    let invalid = || PaymentApiError(HostedPaymentError::InvalidArgument("order_id"));
    let Path(raw) = raw.map_err(|rejection| {
        warn!(error = %rejection, "Invalid order id in path");
        invalid()
    })?;
    OrderId::new(raw).map_err(|_| invalid())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts payment errors to HTTP responses.
#[derive(Debug)]
pub struct PaymentApiError(pub HostedPaymentError);

impl From<HostedPaymentError> for PaymentApiError {
    fn from(err: HostedPaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();

        let message = if status.is_server_error() {
            error!(error = %self.0, "Payment request failed");
            "An internal error occurred".to_string()
        } else {
            self.0.to_string()
        };

        let body = ErrorResponse::new(self.0.code().to_string(), message);
        (status, Json(body)).into_response()
    }
}
