//! Integration tests for the member API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p bookshop-server)
//!
//! Run with: cargo test -p bookshop-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use bookshop_integration_tests::{base_url, client, unique_email};

/// Test helper: Create a member and return the response JSON.
async fn create_member(client: &reqwest::Client, name: &str, email: &str) -> Value {
    let resp = client
        .post(format!("{}/members", base_url()))
        .json(&json!({"name": name, "email": email}))
        .send()
        .await
        .expect("Failed to create member");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse member response")
}

// ============================================================================
// Create & Read Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_create_and_read_member() {
    let client = client();
    let email = unique_email();

    let created = create_member(&client, "testuser", &email).await;
    assert_eq!(created["name"], "testuser");
    assert_eq!(created["email"], email);
    let member_id = created["id"].as_i64().expect("member id");

    let resp = client
        .get(format!("{}/members/{member_id}", base_url()))
        .send()
        .await
        .expect("Failed to get member");
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Value = resp.json().await.expect("Failed to parse member");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_list_members_contains_created() {
    let client = client();
    let email_a = unique_email();
    let email_b = unique_email();

    create_member(&client, "user1", &email_a).await;
    create_member(&client, "user2", &email_b).await;

    let resp = client
        .get(format!("{}/members?limit=10000", base_url()))
        .send()
        .await
        .expect("Failed to list members");
    assert_eq!(resp.status(), StatusCode::OK);

    let members: Vec<Value> = resp.json().await.expect("Failed to parse member list");
    assert!(members.iter().any(|m| m["email"] == email_a));
    assert!(members.iter().any(|m| m["email"] == email_b));
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_duplicate_email_is_400() {
    let client = client();
    let email = unique_email();

    create_member(&client, "first", &email).await;

    let resp = client
        .post(format!("{}/members", base_url()))
        .json(&json!({"name": "second", "email": email}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["error"], "email already registered");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_invalid_email_is_400() {
    let resp = client()
        .post(format!("{}/members", base_url()))
        .json(&json!({"name": "testuser", "email": "not-an-email"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_unknown_member_is_404() {
    let resp = client()
        .get(format!("{}/members/999999999", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
