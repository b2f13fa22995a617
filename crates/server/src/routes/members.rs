//! Member API handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use bookshop_core::{Email, MemberId};

use crate::db::MemberRepository;
use crate::error::AppError;
use crate::models::Member;
use crate::routes::Pagination;
use crate::state::AppState;

/// Build the member router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/members", post(create_member).get(list_members))
        .route("/members/{id}", get(get_member))
}

/// Request for registering a member.
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
}

/// Register a new member.
///
/// # Errors
///
/// Returns 400 if the email is malformed or already registered.
pub async fn create_member(
    State(state): State<AppState>,
    Json(body): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<Member>), AppError> {
    let email = Email::parse(&body.email).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let member = MemberRepository::new(state.pool())
        .create(&body.name, &email)
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// List members with offset/limit pagination.
///
/// # Errors
///
/// Returns 500 if the database operation fails.
pub async fn list_members(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Member>>, AppError> {
    let members = MemberRepository::new(state.pool())
        .list(page.skip, page.limit)
        .await?;

    Ok(Json(members))
}

/// Get a member by ID.
///
/// # Errors
///
/// Returns 404 if no member has the given ID.
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Member>, AppError> {
    let member = MemberRepository::new(state.pool())
        .get_by_id(MemberId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("member not found: id={id}")))?;

    Ok(Json(member))
}
