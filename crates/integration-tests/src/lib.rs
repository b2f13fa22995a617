//! Integration tests for Bookshop.
//!
//! # Running Tests
//!
//! ```bash
//! # Run migrations and start the server
//! cargo run -p bookshop-cli -- migrate
//! cargo run -p bookshop-server
//!
//! # Run integration tests (ignored by default)
//! cargo test -p bookshop-integration-tests -- --ignored
//! ```
//!
//! The tests create their own members/books/categories with unique
//! names/emails, so they can run against a shared development database.

use uuid::Uuid;

/// Base URL for the API server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("BOOKSHOP_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Build an HTTP client for the tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Generate a unique email address for test isolation.
#[must_use]
pub fn unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

/// Generate a unique name with the given prefix for test isolation.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
