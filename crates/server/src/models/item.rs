//! Item domain types.
//!
//! Items are stored with single-table inheritance: every row carries the
//! shared fields, and the `item_type` discriminator selects the subtype
//! payload. In Rust that maps to a struct with shared fields plus the
//! [`ItemDetails`] tagged enum flattened into it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bookshop_core::{CategoryId, ItemId};

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item ID.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Current unit price.
    pub price: Decimal,
    /// Units in stock. Never negative.
    pub stock_quantity: i32,
    /// Subtype payload, tagged by `item_type`.
    #[serde(flatten)]
    pub details: ItemDetails,
}

/// Subtype payload for an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "item_type", rename_all = "snake_case")]
pub enum ItemDetails {
    /// Plain item with no subtype fields.
    Item,
    /// A book.
    Book {
        author: Option<String>,
        isbn: Option<String>,
    },
}

impl ItemDetails {
    /// The discriminator value stored in the `items.item_type` column.
    #[must_use]
    pub const fn discriminator(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Book { .. } => "book",
        }
    }
}

/// Input for creating a new book.
#[derive(Debug, Clone)]
pub struct CreateBookInput {
    pub name: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub author: Option<String>,
    pub isbn: Option<String>,
    /// Categories to link at creation. IDs that do not exist are skipped.
    pub category_ids: Vec<CategoryId>,
}
