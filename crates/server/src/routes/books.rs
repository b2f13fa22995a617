//! Book API handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use bookshop_core::{CategoryId, ItemId};

use crate::db::ItemRepository;
use crate::error::AppError;
use crate::models::{CreateBookInput, Item};
use crate::routes::Pagination;
use crate::state::AppState;

/// Build the book router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items/books", post(create_book).get(list_books))
        .route("/items/books/{id}", get(get_book))
}

/// Request for registering a book.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    /// Categories to link at creation; unknown IDs are skipped.
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
}

/// Register a new book.
///
/// # Errors
///
/// Returns 400 if the initial stock quantity is negative.
pub async fn create_book(
    State(state): State<AppState>,
    Json(body): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    if body.stock_quantity < 0 {
        return Err(AppError::BadRequest(
            "stock_quantity must not be negative".to_owned(),
        ));
    }

    let input = CreateBookInput {
        name: body.name,
        price: body.price,
        stock_quantity: body.stock_quantity,
        author: body.author,
        isbn: body.isbn,
        category_ids: body.category_ids,
    };

    let book = ItemRepository::new(state.pool()).create_book(&input).await?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// List books with offset/limit pagination.
///
/// # Errors
///
/// Returns 500 if the database operation fails.
pub async fn list_books(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Item>>, AppError> {
    let books = ItemRepository::new(state.pool())
        .list_books(page.skip, page.limit)
        .await?;

    Ok(Json(books))
}

/// Get a book by ID.
///
/// # Errors
///
/// Returns 404 if no book has the given ID.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Item>, AppError> {
    let book = ItemRepository::new(state.pool())
        .get_book(ItemId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book not found: id={id}")))?;

    Ok(Json(book))
}
