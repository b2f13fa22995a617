//! Integration tests for the order API.
//!
//! These cover the order-placement workflow end to end: stock decrement,
//! price snapshotting, atomic failure on insufficient stock, and the
//! business-error responses.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p bookshop-server)
//!
//! Run with: cargo test -p bookshop-integration-tests -- --ignored

use std::str::FromStr;

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use bookshop_integration_tests::{base_url, client, unique_email, unique_name};

/// Test helper: Create a member and return its ID.
async fn create_member(client: &reqwest::Client) -> i64 {
    let resp = client
        .post(format!("{}/members", base_url()))
        .json(&json!({"name": "order_user", "email": unique_email()}))
        .send()
        .await
        .expect("Failed to create member");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let member: Value = resp.json().await.expect("Failed to parse member");
    member["id"].as_i64().expect("member id")
}

/// Test helper: Create a book with the given price/stock and return its ID.
async fn create_book(client: &reqwest::Client, price: i64, stock: i64) -> i64 {
    let resp = client
        .post(format!("{}/items/books", base_url()))
        .json(&json!({
            "name": unique_name("Order Book"),
            "price": price,
            "stock_quantity": stock
        }))
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let book: Value = resp.json().await.expect("Failed to parse book");
    book["id"].as_i64().expect("book id")
}

/// Test helper: Fetch a book's current stock quantity.
async fn stock_of(client: &reqwest::Client, book_id: i64) -> i64 {
    let resp = client
        .get(format!("{}/items/books/{book_id}", base_url()))
        .send()
        .await
        .expect("Failed to get book");
    assert_eq!(resp.status(), StatusCode::OK);
    let book: Value = resp.json().await.expect("Failed to parse book");
    book["stock_quantity"].as_i64().expect("stock quantity")
}

// ============================================================================
// Placement Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_place_order_reduces_stock_and_snapshots_price() {
    let client = client();
    let member_id = create_member(&client).await;
    let book_id = create_book(&client, 20000, 5).await;

    let resp = client
        .post(format!("{}/orders", base_url()))
        .json(&json!({
            "member_id": member_id,
            "items": [{"item_id": book_id, "count": 2}]
        }))
        .send()
        .await
        .expect("Failed to place order");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let order: Value = resp.json().await.expect("Failed to parse order");
    assert_eq!(order["member_id"].as_i64(), Some(member_id));
    assert_eq!(order["status"], "ORDERED");

    let order_items = order["order_items"].as_array().expect("order items");
    assert_eq!(order_items.len(), 1);
    assert_eq!(order_items[0]["item_id"].as_i64(), Some(book_id));
    assert_eq!(order_items[0]["count"], 2);
    let order_price =
        Decimal::from_str(order_items[0]["order_price"].as_str().expect("order price"))
            .expect("decimal order price");
    assert_eq!(order_price, Decimal::new(20000, 0));

    // Stock reduced by the ordered count
    assert_eq!(stock_of(&client, book_id).await, 3);

    // Fetching the order returns the same data
    let order_id = order["id"].as_i64().expect("order id");
    let resp = client
        .get(format!("{}/orders/{order_id}", base_url()))
        .send()
        .await
        .expect("Failed to get order");
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("Failed to parse order");
    assert_eq!(fetched, order);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_insufficient_stock_is_400_and_stock_unchanged() {
    let client = client();
    let member_id = create_member(&client).await;
    let book_id = create_book(&client, 100, 1).await;

    let resp = client
        .post(format!("{}/orders", base_url()))
        .json(&json!({
            "member_id": member_id,
            "items": [{"item_id": book_id, "count": 2}]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(
        body["error"],
        format!("insufficient stock for item: id={book_id}")
    );

    // The failed order left the stock untouched
    assert_eq!(stock_of(&client, book_id).await, 1);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_multi_line_failure_rolls_back_all_decrements() {
    let client = client();
    let member_id = create_member(&client).await;
    let plenty_id = create_book(&client, 100, 10).await;
    let scarce_id = create_book(&client, 100, 1).await;

    // Second line fails, so the first line's decrement must roll back too.
    let resp = client
        .post(format!("{}/orders", base_url()))
        .json(&json!({
            "member_id": member_id,
            "items": [
                {"item_id": plenty_id, "count": 3},
                {"item_id": scarce_id, "count": 2}
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(stock_of(&client, plenty_id).await, 10);
    assert_eq!(stock_of(&client, scarce_id).await, 1);
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_unknown_member_is_400() {
    let client = client();
    let book_id = create_book(&client, 100, 1).await;

    let resp = client
        .post(format!("{}/orders", base_url()))
        .json(&json!({
            "member_id": 999999999,
            "items": [{"item_id": book_id, "count": 1}]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["error"], "member not found: id=999999999");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_unknown_item_is_400() {
    let client = client();
    let member_id = create_member(&client).await;

    let resp = client
        .post(format!("{}/orders", base_url()))
        .json(&json!({
            "member_id": member_id,
            "items": [{"item_id": 999999999, "count": 1}]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["error"], "item not found: id=999999999");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_unknown_order_is_404() {
    let resp = client()
        .get(format!("{}/orders/999999999", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
