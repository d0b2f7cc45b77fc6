//! HandleIpnHandler - Command handler for gateway payment notifications (IPN).
//!
//! The gateway posts a notification after the shopper pays, independently of
//! the browser returning to the store. Either may arrive first.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::application::PaymentSettings;
use crate::domain::foundation::{OrderId, Timestamp};
use crate::domain::hosted_payment::{
    verify, HostedPaymentError, InboundNotification, InvalidSignature,
    Verification, APPROVED_REASON_CODE, ORDER_NUMBER, REASON_CODE,
};
use crate::ports::OrderRepository;

/// Command to handle one gateway notification.
#[derive(Debug, Clone)]
pub struct HandleIpnCommand {
    pub notification: InboundNotification,
}

/// Why a notification was not acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpnRejection {
    InvalidSignature(InvalidSignature),
    /// `reasonCode` absent or not the approval code.
    NotApproved,
    /// `orderNumber` absent or not an integer order id.
    InvalidOrderNumber,
    OrderNotFound,
    /// Order is cancelled or no longer pending.
    NotAuthorizable,
}

impl fmt::Display for IpnRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpnRejection::InvalidSignature(reason) => write!(f, "invalid_signature:{}", reason),
            IpnRejection::NotApproved => f.write_str("not_approved"),
            IpnRejection::InvalidOrderNumber => f.write_str("invalid_order_number"),
            IpnRejection::OrderNotFound => f.write_str("order_not_found"),
            IpnRejection::NotAuthorizable => f.write_str("not_authorizable"),
        }
    }
}

/// Result of notification processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleIpnResult {
    /// Order moved from Pending to Authorized.
    Authorized { order_id: OrderId },
    /// Notification acknowledged without any state change.
    Rejected(IpnRejection),
}

/// Handler for gateway notifications.
///
/// Verifies the signature, checks the approval code, and authorizes the
/// referenced order at most once.
pub struct HandleIpnHandler {
    settings: Arc<PaymentSettings>,
    orders: Arc<dyn OrderRepository>,
}

impl HandleIpnHandler {
    pub fn new(settings: Arc<PaymentSettings>, orders: Arc<dyn OrderRepository>) -> Self {
        Self { settings, orders }
    }

    pub async fn handle(&self, cmd: HandleIpnCommand) -> Result<HandleIpnResult, HostedPaymentError> {
        let notification = &cmd.notification;

        // 1. Signature
        if let Verification::Invalid(reason) = verify(notification, self.settings.credentials.public_key()) {
            return Ok(reject(IpnRejection::InvalidSignature(reason), notification));
        }

        if !notification.is_signed(ORDER_NUMBER) || !notification.is_signed(REASON_CODE) {
            warn!(
                signed_fields = ?notification.signed_field_names(),
                "IPN signature does not cover orderNumber and reasonCode"
            );
        }

        // 2. Approval
        if notification.reason_code() != Some(APPROVED_REASON_CODE) {
            return Ok(reject(IpnRejection::NotApproved, notification));
        }

        // 3. Order reference
        let order_id = match notification.order_number().map(str::parse::<OrderId>) {
            Some(Ok(id)) => id,
            _ => return Ok(reject(IpnRejection::InvalidOrderNumber, notification)),
        };

        // 4. Lookup
        let order = match self.orders.find_by_id(&order_id).await? {
            Some(order) => order,
            None => return Ok(reject(IpnRejection::OrderNotFound, notification)),
        };

        // 5. Guard
        if !order.can_mark_as_authorized() {
            return Ok(reject(IpnRejection::NotAuthorizable, notification));
        }

        // 6. Transition; another notification may have won the race
        if !self.orders.mark_as_authorized(&order_id, Timestamp::now()).await? {
            return Ok(reject(IpnRejection::NotAuthorizable, notification));
        }

        info!(order_id = %order_id, "Order authorized by gateway notification");
        Ok(HandleIpnResult::Authorized { order_id })
    }
}

fn reject(rejection: IpnRejection, notification: &InboundNotification) -> HandleIpnResult {
    match rejection {
        IpnRejection::InvalidSignature(_) => warn!(
            reason = %rejection,
            order_number = notification.order_number().unwrap_or_default(),
            "IPN rejected"
        ),
        _ => info!(
            reason = %rejection,
            order_number = notification.order_number().unwrap_or_default(),
            reason_code = notification.reason_code().unwrap_or_default(),
            "IPN ignored"
        ),
    }
    HandleIpnResult::Rejected(rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AddressId, CurrencyId, DomainError};
    use crate::domain::hosted_payment::{sign, GatewayCredentials};
    use crate::domain::order::{Order, OrderStatus, PaymentStatus, ShippingStatus};
    use async_trait::async_trait;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockOrderRepository {
        orders: Mutex<Vec<Order>>,
        fail: bool,
    }

    impl MockOrderRepository {
        fn with_order(order: Order) -> Self {
            Self {
                orders: Mutex::new(vec![order]),
                fail: false,
            }
        }

        fn empty() -> Self {
            Self {
                orders: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                orders: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn payment_status(&self, id: i32) -> PaymentStatus {
            let orders = self.orders.lock().unwrap();
            orders
                .iter()
                .find(|o| o.id.value() == id)
                .map(|o| o.payment_status)
                .unwrap()
        }
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepository {
        async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
            if self.fail {
                return Err(DomainError::database("connection refused"));
            }
            let orders = self.orders.lock().unwrap();
            Ok(orders.iter().find(|o| &o.id == id).cloned())
        }

        async fn mark_as_authorized(&self, id: &OrderId, at: Timestamp) -> Result<bool, DomainError> {
            let mut orders = self.orders.lock().unwrap();
            match orders.iter_mut().find(|o| &o.id == id) {
                Some(order) if order.can_mark_as_authorized() => {
                    order.mark_as_authorized(at)?;
                    Ok(true)
                }
                _ => Ok(false),
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Fixtures
    // ════════════════════════════════════════════════════════════════════════════

    const SECRET: &str = "k";

    fn settings() -> Arc<PaymentSettings> {
        Arc::new(PaymentSettings::new(
            GatewayCredentials::new("https://gw.test/hop", "M1", SECRET, "SN-1"),
            BigDecimal::from(0),
            "shop.test",
            true,
            CurrencyId::new(1).unwrap(),
        ))
    }

    fn pending_order(id: i32) -> Order {
        Order::place(
            OrderId::new(id).unwrap(),
            BigDecimal::from_str("19.50").unwrap(),
            ShippingStatus::ShippingNotRequired,
            AddressId::new(1).unwrap(),
            None,
            Timestamp::now(),
        )
    }

    fn notification(reason_code: &str, order_number: &str, secret: &str) -> InboundNotification {
        let signature = sign(&format!("{}{}", reason_code, order_number), secret);
        InboundNotification::from_pairs([
            ("reasonCode", reason_code.to_string()),
            ("orderNumber", order_number.to_string()),
            ("signedFields", "reasonCode,orderNumber".to_string()),
            ("transactionSignature", signature),
        ])
    }

    fn handler(repo: Arc<MockOrderRepository>) -> HandleIpnHandler {
        HandleIpnHandler::new(settings(), repo)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn approved_notification_authorizes_pending_order() {
        let repo = Arc::new(MockOrderRepository::with_order(pending_order(42)));

        let result = handler(repo.clone())
            .handle(HandleIpnCommand {
                notification: notification("100", "42", SECRET),
            })
            .await
            .unwrap();

        assert_eq!(
            result,
            HandleIpnResult::Authorized {
                order_id: OrderId::new(42).unwrap()
            }
        );
        assert_eq!(repo.payment_status(42), PaymentStatus::Authorized);
    }

    #[tokio::test]
    async fn order_number_with_whitespace_is_accepted() {
        let repo = Arc::new(MockOrderRepository::with_order(pending_order(42)));

        let result = handler(repo.clone())
            .handle(HandleIpnCommand {
                notification: notification("100", " 42 ", SECRET),
            })
            .await
            .unwrap();

        assert!(matches!(result, HandleIpnResult::Authorized { .. }));
    }

    #[tokio::test]
    async fn second_notification_is_not_authorizable() {
        let repo = Arc::new(MockOrderRepository::with_order(pending_order(42)));
        let handler = handler(repo.clone());
        let cmd = HandleIpnCommand {
            notification: notification("100", "42", SECRET),
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert!(matches!(first, HandleIpnResult::Authorized { .. }));
        assert_eq!(second, HandleIpnResult::Rejected(IpnRejection::NotAuthorizable));
        assert_eq!(repo.payment_status(42), PaymentStatus::Authorized);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejections
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn forged_signature_is_rejected_before_lookup() {
        let repo = Arc::new(MockOrderRepository::with_order(pending_order(42)));

        let result = handler(repo.clone())
            .handle(HandleIpnCommand {
                notification: notification("100", "42", "not-the-secret"),
            })
            .await
            .unwrap();

        assert_eq!(
            result,
            HandleIpnResult::Rejected(IpnRejection::InvalidSignature(InvalidSignature::Mismatch))
        );
        assert_eq!(repo.payment_status(42), PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn declined_reason_code_is_not_approved() {
        let repo = Arc::new(MockOrderRepository::with_order(pending_order(42)));

        let result = handler(repo.clone())
            .handle(HandleIpnCommand {
                notification: notification("203", "42", SECRET),
            })
            .await
            .unwrap();

        assert_eq!(result, HandleIpnResult::Rejected(IpnRejection::NotApproved));
        assert_eq!(repo.payment_status(42), PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn non_numeric_order_number_is_invalid() {
        let repo = Arc::new(MockOrderRepository::empty());

        let result = handler(repo)
            .handle(HandleIpnCommand {
                notification: notification("100", "abc", SECRET),
            })
            .await
            .unwrap();

        assert_eq!(result, HandleIpnResult::Rejected(IpnRejection::InvalidOrderNumber));
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let repo = Arc::new(MockOrderRepository::empty());

        let result = handler(repo)
            .handle(HandleIpnCommand {
                notification: notification("100", "999", SECRET),
            })
            .await
            .unwrap();

        assert_eq!(result, HandleIpnResult::Rejected(IpnRejection::OrderNotFound));
    }

    #[tokio::test]
    async fn cancelled_order_is_not_authorizable() {
        let mut order = pending_order(42);
        order.order_status = OrderStatus::Cancelled;
        let repo = Arc::new(MockOrderRepository::with_order(order));

        let result = handler(repo.clone())
            .handle(HandleIpnCommand {
                notification: notification("100", "42", SECRET),
            })
            .await
            .unwrap();

        assert_eq!(result, HandleIpnResult::Rejected(IpnRejection::NotAuthorizable));
        assert_eq!(repo.payment_status(42), PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn unsigned_notification_is_rejected() {
        let repo = Arc::new(MockOrderRepository::with_order(pending_order(42)));

        let result = handler(repo)
            .handle(HandleIpnCommand {
                notification: InboundNotification::from_pairs([
                    ("reasonCode", "100"),
                    ("orderNumber", "42"),
                ]),
            })
            .await
            .unwrap();

        assert_eq!(
            result,
            HandleIpnResult::Rejected(IpnRejection::InvalidSignature(
                InvalidSignature::MissingSignature
            ))
        );
    }

    #[tokio::test]
    async fn repository_failure_is_infrastructure_error() {
        let repo = Arc::new(MockOrderRepository::failing());

        let result = handler(repo)
            .handle(HandleIpnCommand {
                notification: notification("100", "42", SECRET),
            })
            .await;

        assert!(matches!(result, Err(HostedPaymentError::Infrastructure(_))));
    }

    #[test]
    fn rejection_display_is_stable() {
        assert_eq!(
            IpnRejection::InvalidSignature(InvalidSignature::Mismatch).to_string(),
            "invalid_signature:mismatch"
        );
        assert_eq!(IpnRejection::NotAuthorizable.to_string(), "not_authorizable");
    }
}
