//! Order repository for database operations.
//!
//! Order placement is the one multi-statement workflow in the system. It
//! runs inside a single transaction: the member check, per-line stock
//! decrements, and the order/line-item inserts either all commit or none
//! do. Stock is decremented with a guarded UPDATE so the stock invariant
//! holds under the storage engine's isolation, without explicit locking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;

use bookshop_core::{ItemId, MemberId, OrderId, OrderItemId, OrderStatus};

use super::RepositoryError;
use crate::models::{Order, OrderItem, OrderLine};

/// Errors that can fail order placement.
///
/// The first three are business-rule violations surfaced to the caller;
/// `Repository` wraps storage faults.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// The ordering member does not exist.
    #[error("member not found: id={0}")]
    MemberNotFound(MemberId),

    /// An ordered item does not exist.
    #[error("item not found: id={0}")]
    ItemNotFound(ItemId),

    /// An ordered item has fewer units in stock than requested.
    #[error("insufficient stock for item: id={0}")]
    InsufficientStock(ItemId),

    /// Storage fault.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for PlaceOrderError {
    fn from(err: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(err))
    }
}

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i32,
    member_id: i32,
    order_date: DateTime<Utc>,
    status: String,
}

impl OrderRow {
    /// Convert into a domain [`Order`] with the given line items.
    fn into_order(self, order_items: Vec<OrderItem>) -> Result<Order, RepositoryError> {
        let status: OrderStatus = self.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order status in database: {e}"))
        })?;

        Ok(Order {
            id: OrderId::new(self.id),
            member_id: MemberId::new(self.member_id),
            order_date: self.order_date,
            status,
            order_items,
        })
    }
}

/// Internal row type for order line-item queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: i32,
    item_id: i32,
    order_price: Decimal,
    count: i32,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: OrderItemId::new(row.id),
            item_id: ItemId::new(row.item_id),
            order_price: row.order_price,
            count: row.count,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Place an order for a member, atomically.
    ///
    /// Validates the member and every line's item, decrements stock, and
    /// persists the order with its line items in one transaction. Each
    /// line's `order_price` snapshots the item's price at this moment.
    /// On any failure the transaction rolls back and no state changes.
    ///
    /// # Errors
    ///
    /// Returns `PlaceOrderError::MemberNotFound` if the member does not exist.
    /// Returns `PlaceOrderError::ItemNotFound` if any item does not exist.
    /// Returns `PlaceOrderError::InsufficientStock` if any item has fewer
    /// units in stock than requested.
    /// Returns `PlaceOrderError::Repository` for storage faults.
    pub async fn place(
        &self,
        member_id: MemberId,
        lines: &[OrderLine],
    ) -> Result<Order, PlaceOrderError> {
        let mut tx = self.pool.begin().await?;

        let member_exists: Option<i32> =
            sqlx::query_scalar("SELECT id FROM members WHERE id = $1")
                .bind(member_id)
                .fetch_optional(&mut *tx)
                .await?;
        if member_exists.is_none() {
            return Err(PlaceOrderError::MemberNotFound(member_id));
        }

        // Snapshot each line's price and decrement stock. The guarded UPDATE
        // affects zero rows when stock is insufficient, failing the order.
        let mut snapshots: Vec<(ItemId, Decimal, i32)> = Vec::with_capacity(lines.len());
        for line in lines {
            let price: Option<Decimal> = sqlx::query_scalar("SELECT price FROM items WHERE id = $1")
                .bind(line.item_id)
                .fetch_optional(&mut *tx)
                .await?;
            let Some(price) = price else {
                return Err(PlaceOrderError::ItemNotFound(line.item_id));
            };

            let updated = sqlx::query(
                r"
                UPDATE items
                SET stock_quantity = stock_quantity - $1
                WHERE id = $2 AND stock_quantity >= $1
                ",
            )
            .bind(line.count)
            .bind(line.item_id)
            .execute(&mut *tx)
            .await?;
            if updated.rows_affected() == 0 {
                return Err(PlaceOrderError::InsufficientStock(line.item_id));
            }

            snapshots.push((line.item_id, price, line.count));
        }

        let order_row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (member_id)
            VALUES ($1)
            RETURNING id, member_id, order_date, status
            ",
        )
        .bind(member_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut order_items = Vec::with_capacity(snapshots.len());
        for (item_id, order_price, count) in snapshots {
            let row = sqlx::query_as::<_, OrderItemRow>(
                r"
                INSERT INTO order_items (order_id, item_id, order_price, count)
                VALUES ($1, $2, $3, $4)
                RETURNING id, item_id, order_price, count
                ",
            )
            .bind(order_row.id)
            .bind(item_id)
            .bind(order_price)
            .bind(count)
            .fetch_one(&mut *tx)
            .await?;
            order_items.push(row.into());
        }

        tx.commit().await?;

        Ok(order_row.into_order(order_items)?)
    }

    /// Get an order by its ID, with its line items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, member_id, order_date, status
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT id, item_id, order_price, count
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let order_items = item_rows.into_iter().map(Into::into).collect();
        row.into_order(order_items).map(Some)
    }
}
