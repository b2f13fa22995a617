//! Category domain type.

use serde::Serialize;

use bookshop_core::CategoryId;

/// A product category. Items relate to categories many-to-many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Category name (unique across categories).
    pub name: String,
}
