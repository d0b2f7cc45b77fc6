//! Data Transfer Objects for payment HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::hosted_payment::PaymentMethodCapabilities;

/// Response for the re-post eligibility endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RePostResponse {
    pub order_id: i32,
    pub can_repost: bool,
}

/// Response describing the payment method.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentInfoResponse {
    pub description: String,
    pub capabilities: PaymentMethodCapabilities,
    /// Decimal string with two places, e.g. `"2.50"`.
    pub additional_fee: String,
    pub configuration_page_url: String,
    pub hide_payment_method: bool,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repost_response_serializes() {
        let response = RePostResponse {
            order_id: 42,
            can_repost: true,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"order_id": 42, "can_repost": true})
        );
    }

    #[test]
    fn error_response_serializes() {
        let response = ErrorResponse::new("ORDER_NOT_FOUND", "Order 7 not found");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"error_code": "ORDER_NOT_FOUND", "message": "Order 7 not found"})
        );
    }

    #[test]
    fn payment_info_embeds_capabilities() {
        let response = PaymentInfoResponse {
            description: "desc".to_string(),
            capabilities: PaymentMethodCapabilities::hosted_order_page(),
            additional_fee: "0.00".to_string(),
            configuration_page_url: "https://shop.test/Admin/PaymentCyberSource/Configure"
                .to_string(),
            hide_payment_method: false,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["capabilities"]["supports_refund"], false);
        assert_eq!(value["additional_fee"], "0.00");
    }
}
