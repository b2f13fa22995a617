//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use bookshop_core::{ItemId, MemberId, OrderId, OrderItemId, OrderStatus};

/// An order placed by a member, with its line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The member who placed the order.
    pub member_id: MemberId,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Order lifecycle status.
    pub status: OrderStatus,
    /// Line items, in insertion order.
    pub order_items: Vec<OrderItem>,
}

/// A line item of an [`Order`].
///
/// `order_price` snapshots the item's price at order time; later price
/// changes to the item do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    /// Unique line-item ID.
    pub id: OrderItemId,
    /// The ordered item.
    pub item_id: ItemId,
    /// Unit price at order time.
    pub order_price: Decimal,
    /// Units ordered.
    pub count: i32,
}

/// One requested line of a new order: which item, how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub count: i32,
}
