//! HTTP route handlers for the API server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health            - Health check (in main)
//! GET  /health/ready      - Readiness check (in main)
//!
//! # Members
//! POST /members           - Register member
//! GET  /members           - Member listing (skip/limit)
//! GET  /members/{id}      - Member detail
//!
//! # Books
//! POST /items/books       - Register book
//! GET  /items/books       - Book listing (skip/limit)
//! GET  /items/books/{id}  - Book detail
//!
//! # Orders
//! POST /orders            - Place order
//! GET  /orders/{id}       - Order detail
//!
//! # Categories
//! POST /categories        - Register category
//! GET  /categories        - Category listing (skip/limit)
//! ```

pub mod books;
pub mod categories;
pub mod members;
pub mod orders;

use axum::Router;
use serde::Deserialize;

use crate::state::AppState;

/// Offset/limit pagination query parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    /// Rows to skip from the start of the listing.
    #[serde(default)]
    pub skip: i64,
    /// Maximum rows to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

const fn default_limit() -> i64 {
    100
}

/// Create the application router with all entity routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(members::router())
        .merge(books::router())
        .merge(orders::router())
        .merge(categories::router())
}
