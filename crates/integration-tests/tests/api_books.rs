//! Integration tests for the book API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p bookshop-server)
//!
//! Run with: cargo test -p bookshop-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use bookshop_integration_tests::{base_url, client, unique_name};

/// Test helper: Create a book and return the response JSON.
async fn create_book(client: &reqwest::Client, body: Value) -> Value {
    let resp = client
        .post(format!("{}/items/books", base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse book response")
}

// ============================================================================
// Create & Read Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_create_and_read_book() {
    let client = client();
    let name = unique_name("Test Book");

    let created = create_book(
        &client,
        json!({
            "name": name,
            "price": 10000,
            "stock_quantity": 10,
            "author": "Test Author",
            "isbn": "1234567890"
        }),
    )
    .await;
    assert_eq!(created["name"], name);
    assert_eq!(created["item_type"], "book");
    assert_eq!(created["author"], "Test Author");
    assert_eq!(created["isbn"], "1234567890");
    assert_eq!(created["stock_quantity"], 10);
    let book_id = created["id"].as_i64().expect("book id");

    let resp = client
        .get(format!("{}/items/books/{book_id}", base_url()))
        .send()
        .await
        .expect("Failed to get book");
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Value = resp.json().await.expect("Failed to parse book");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_create_book_with_categories() {
    let client = client();
    let category_name = unique_name("Category");

    let resp = client
        .post(format!("{}/categories", base_url()))
        .json(&json!({"name": category_name}))
        .send()
        .await
        .expect("Failed to create category");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let category: Value = resp.json().await.expect("Failed to parse category");

    // Unknown category IDs are skipped silently; the book is still created.
    let created = create_book(
        &client,
        json!({
            "name": unique_name("Categorized Book"),
            "price": 5000,
            "stock_quantity": 3,
            "category_ids": [category["id"], 999999999]
        }),
    )
    .await;
    assert_eq!(created["item_type"], "book");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_list_books_contains_created() {
    let client = client();
    let name = unique_name("Listed Book");

    create_book(&client, json!({"name": name, "price": 100, "stock_quantity": 1})).await;

    let resp = client
        .get(format!("{}/items/books?limit=10000", base_url()))
        .send()
        .await
        .expect("Failed to list books");
    assert_eq!(resp.status(), StatusCode::OK);

    let books: Vec<Value> = resp.json().await.expect("Failed to parse book list");
    assert!(books.iter().any(|b| b["name"] == name));
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_unknown_book_is_404() {
    let resp = client()
        .get(format!("{}/items/books/999999999", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_negative_stock_is_400() {
    let resp = client()
        .post(format!("{}/items/books", base_url()))
        .json(&json!({"name": "Bad Book", "price": 100, "stock_quantity": -1}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
