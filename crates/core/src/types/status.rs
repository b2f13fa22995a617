//! Status enums for various entities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Orders are created in the [`OrderStatus::Ordered`] state and are never
/// mutated afterwards; the variant exists as an enum so the stored VARCHAR
/// is parse-checked on the way out of the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Ordered,
}

impl OrderStatus {
    /// The string form stored in the `orders.status` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ordered => "ORDERED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored status string is not recognized.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl std::str::FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORDERED" => Ok(Self::Ordered),
            other => Err(UnknownOrderStatus(other.to_owned())),
        }
    }
}
