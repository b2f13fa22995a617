//! Order API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use bookshop_core::{ItemId, MemberId, OrderId};

use crate::db::OrderRepository;
use crate::error::AppError;
use crate::models::{Order, OrderLine};
use crate::state::AppState;

/// Build the order router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_order))
}

/// One requested line of a new order.
#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub item_id: i32,
    pub count: i32,
}

/// Request for placing an order.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub member_id: i32,
    pub items: Vec<OrderLineRequest>,
}

/// Place a new order.
///
/// # Errors
///
/// Returns 400 if any count is non-positive, the member or an item does
/// not exist, or any item has insufficient stock.
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    // A non-positive count would inflate stock through the decrement.
    if body.items.iter().any(|line| line.count < 1) {
        return Err(AppError::BadRequest("count must be positive".to_owned()));
    }

    let lines: Vec<OrderLine> = body
        .items
        .iter()
        .map(|line| OrderLine {
            item_id: ItemId::new(line.item_id),
            count: line.count,
        })
        .collect();

    let order = OrderRepository::new(state.pool())
        .place(MemberId::new(body.member_id), &lines)
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Get an order by ID, with its line items.
///
/// # Errors
///
/// Returns 404 if no order has the given ID.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Order>, AppError> {
    let order = OrderRepository::new(state.pool())
        .get_by_id(OrderId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order not found: id={id}")))?;

    Ok(Json(order))
}
