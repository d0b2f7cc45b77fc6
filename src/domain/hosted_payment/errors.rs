//! Error types for the hosted payment flow.
//!
//! Rejected notifications are outcomes, not errors; these cover the cases
//! where the flow cannot proceed at all.

use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId};

/// Errors raised while building redirects or handling notifications.
#[derive(Debug, Error)]
pub enum HostedPaymentError {
    /// A required argument was absent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    /// Billing address, or shipping address of an order that ships.
    #[error("Address not found for order {0}: {1}")]
    AddressNotFound(OrderId, &'static str),

    #[error("Primary store currency {0} not found")]
    CurrencyNotFound(i32),

    /// A collaborator (database, directory) failed.
    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] DomainError),
}

impl HostedPaymentError {
    /// Returns true if repeating the request may succeed.
    ///
    /// The gateway redelivers a notification answered with a server error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HostedPaymentError::Infrastructure(_))
    }

    /// Maps the error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            HostedPaymentError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            HostedPaymentError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            // Store data is inconsistent; the shopper cannot fix it.
            HostedPaymentError::AddressNotFound(_, _) | HostedPaymentError::CurrencyNotFound(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            HostedPaymentError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            HostedPaymentError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            HostedPaymentError::OrderNotFound(_) => ErrorCode::OrderNotFound,
            HostedPaymentError::AddressNotFound(_, _) => ErrorCode::AddressNotFound,
            HostedPaymentError::CurrencyNotFound(_) => ErrorCode::CurrencyNotFound,
            HostedPaymentError::Infrastructure(err) => err.code,
        }
    }
}
