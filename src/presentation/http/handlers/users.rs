//! User Handlers
//!
//! Minimal user surface: the loan validators only need an existing users
//! collection, so the API exposes creation and lookup for seeding
//! borrowers and lenders.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::application::dto::request::CreateUserRequest;
use crate::application::dto::response::UserResponse;
use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".into()));
    }

    let user = User {
        id: Uuid::new_v4(),
        name: body.name,
        created_at: Utc::now(),
    };

    let created = state.users.create(&user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id: Uuid = user_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user_id)))?;

    Ok(Json(UserResponse::from(user)))
}
