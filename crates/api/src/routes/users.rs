//! User account routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{
    ApiResult, AppState,
    middleware::{CurrentUser, SuperUser},
};
use repairdesk_core::{
    PasswordChange, ProfilePatch, UserPatch,
    auth::{hash_password, verify_password},
    validate,
};
use repairdesk_db::{UserRepository, entities::users};
use repairdesk_shared::{AppError, ListResponse};

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/me", get(read_me).patch(update_me))
        .route("/users/me/password", patch(change_password))
        .route("/users/{user_id}", patch(update_user))
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// Whether the account has administrative privileges.
    pub is_superuser: bool,
    /// Registration time.
    pub created_at: DateTime<FixedOffset>,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            full_name: user.full_name,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            created_at: user.created_at,
        }
    }
}

/// GET /users/me - The signed-in account.
async fn read_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}

/// PATCH /users/me - Update own name or email.
async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ProfilePatch>,
) -> ApiResult<Json<UserResponse>> {
    validate(&payload)?;

    let updated = UserRepository::new(state.conn())
        .update(user.id, payload.into(), None)
        .await?;

    info!(user_id = %user.id, "Profile updated");
    Ok(Json(updated.into()))
}

/// PATCH /users/me/password - Change own password.
async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<PasswordChange>,
) -> ApiResult<Json<UserResponse>> {
    validate(&payload)?;

    if !verify_password(&payload.current_password, &user.hashed_password)? {
        return Err(AppError::BadRequest("Incorrect password".to_string()).into());
    }
    if payload.current_password == payload.new_password {
        return Err(AppError::BadRequest(
            "New password cannot be the same as the current one".to_string(),
        )
        .into());
    }

    let password_hash = hash_password(&payload.new_password)?;
    let updated = UserRepository::new(state.conn())
        .set_password(user.id, &password_hash)
        .await?;

    info!(user_id = %user.id, "Password changed");
    Ok(Json(updated.into()))
}

/// GET /users - All accounts (superuser only).
async fn list_users(
    State(state): State<AppState>,
    _admin: SuperUser,
) -> ApiResult<Json<ListResponse<UserResponse>>> {
    let users = UserRepository::new(state.conn()).list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// PATCH /users/{user_id} - Administrative update (superuser only).
async fn update_user(
    State(state): State<AppState>,
    SuperUser(admin): SuperUser,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UserPatch>,
) -> ApiResult<Json<UserResponse>> {
    validate(&payload)?;

    if user_id == admin.id
        && (payload.is_active == Some(false) || payload.is_superuser == Some(false))
    {
        return Err(AppError::BadRequest(
            "Superusers cannot deactivate or demote themselves".to_string(),
        )
        .into());
    }

    let password_hash = payload
        .password
        .as_deref()
        .map(hash_password)
        .transpose()?;

    let updated = UserRepository::new(state.conn())
        .update(user_id, payload, password_hash)
        .await?;

    info!(admin_id = %admin.id, user_id = %user_id, "User updated");
    Ok(Json(updated.into()))
}
