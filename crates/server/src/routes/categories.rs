//! Category API handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::post,
};
use serde::Deserialize;

use crate::db::CategoryRepository;
use crate::error::AppError;
use crate::models::Category;
use crate::routes::Pagination;
use crate::state::AppState;

/// Build the category router.
pub fn router() -> Router<AppState> {
    Router::new().route("/categories", post(create_category).get(list_categories))
}

/// Request for registering a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Register a new category.
///
/// # Errors
///
/// Returns 400 if the name is already taken.
pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = CategoryRepository::new(state.pool())
        .create(&body.name)
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// List categories with offset/limit pagination.
///
/// # Errors
///
/// Returns 500 if the database operation fails.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = CategoryRepository::new(state.pool())
        .list(page.skip, page.limit)
        .await?;

    Ok(Json(categories))
}
