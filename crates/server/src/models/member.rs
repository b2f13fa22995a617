//! Member domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bookshop_core::{Email, MemberId};

/// A registered member of the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Unique member ID.
    pub id: MemberId,
    /// Member's display name.
    pub name: String,
    /// Member's email address (unique across members).
    pub email: Email,
    /// When the member was created.
    pub created_at: DateTime<Utc>,
}
