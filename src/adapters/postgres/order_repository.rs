//! PostgreSQL implementation of OrderRepository.
//!
//! Reads the store's `orders` table and performs the conditional
//! Pending -> Authorized update.

use std::str::FromStr;

use crate::domain::foundation::{AddressId, DomainError, ErrorCode, OrderId, Timestamp};
use crate::domain::order::{Order, OrderStatus, PaymentStatus, ShippingStatus};
use crate::ports::OrderRepository;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL implementation of the OrderRepository port.
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgresOrderRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an order.
///
/// `order_total` is selected as text so the decimal keeps its exact scale.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i32,
    order_total: String,
    payment_status: String,
    order_status: String,
    shipping_status: String,
    billing_address_id: i32,
    shipping_address_id: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let order_total = BigDecimal::from_str(&row.order_total).map_err(|e| {
            corrupt(row.id, format!("Invalid order_total {}: {}", row.order_total, e))
        })?;

        Ok(Order {
            id: OrderId::new(row.id)?,
            order_total,
            payment_status: PaymentStatus::parse(&row.payment_status)
                .ok_or_else(|| corrupt(row.id, format!("Invalid payment_status: {}", row.payment_status)))?,
            order_status: OrderStatus::parse(&row.order_status)
                .ok_or_else(|| corrupt(row.id, format!("Invalid order_status: {}", row.order_status)))?,
            shipping_status: ShippingStatus::parse(&row.shipping_status).ok_or_else(|| {
                corrupt(row.id, format!("Invalid shipping_status: {}", row.shipping_status))
            })?,
            billing_address_id: AddressId::new(row.billing_address_id)?,
            shipping_address_id: row.shipping_address_id.map(AddressId::new).transpose()?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn corrupt(order_id: i32, message: String) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, message).with_detail("order_id", order_id.to_string())
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let row: Option<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, order_total::TEXT AS order_total, payment_status, order_status,
                   shipping_status, billing_address_id, shipping_address_id,
                   created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find order: {}", e)))?;

        row.map(Order::try_from).transpose()
    }

    async fn mark_as_authorized(&self, id: &OrderId, at: Timestamp) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET
                payment_status = $2,
                updated_at = $3
            WHERE id = $1
              AND payment_status = $4
              AND order_status <> $5
            "#,
        )
        .bind(id.value())
        .bind(PaymentStatus::Authorized.as_str())
        .bind(at.as_datetime())
        .bind(PaymentStatus::Pending.as_str())
        .bind(OrderStatus::Cancelled.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to authorize order: {}", e)))?;

        Ok(result.rows_affected() == 1)
    }
}
