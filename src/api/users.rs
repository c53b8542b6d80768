//! User-management endpoints

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::middleware::AuthContext;
use crate::auth::password::hash_password;
use crate::auth::policy::{allowed, Action};
use crate::error::{Error, Result};
use crate::models::{Role, User, UserResponse, UserUpdate};

use super::server::SharedState;

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub skip: usize,
    pub limit: Option<usize>,
    pub role: Option<Role>,
}

fn not_found() -> Error {
    Error::NotFound("User not found".to_string())
}

fn require_manage(ctx: &AuthContext) -> Result<()> {
    if allowed(ctx.role(), Action::ManageUser) {
        Ok(())
    } else {
        Err(Error::Forbidden("Not enough permissions".to_string()))
    }
}

fn require_manage_or_self(ctx: &AuthContext, user_id: i64) -> Result<()> {
    if allowed(ctx.role(), Action::ManageUser) || ctx.id() == user_id {
        Ok(())
    } else {
        Err(Error::Forbidden("Not enough permissions".to_string()))
    }
}

fn apply_update(user: &mut User, update: UserUpdate, password_hash: Option<String>) {
    if let Some(username) = update.username {
        user.username = username;
    }
    if let Some(email) = update.email {
        user.email = email;
    }
    if let Some(first_name) = update.first_name {
        user.first_name = Some(first_name);
    }
    if let Some(last_name) = update.last_name {
        user.last_name = Some(last_name);
    }
    if let Some(bio) = update.bio {
        user.bio = Some(bio);
    }
    if let Some(avatar_url) = update.avatar_url {
        user.avatar_url = Some(avatar_url);
    }
    if let Some(hash) = password_hash {
        user.password_hash = hash;
    }
    user.updated_at = chrono::Utc::now();
}

async fn update_by_id(
    state: &SharedState,
    user_id: i64,
    update: UserUpdate,
) -> Result<UserResponse> {
    let mut user = state.users.find_by_id(user_id).await.ok_or_else(not_found)?;

    // Hash outside the store lock
    let password_hash = match &update.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };
    apply_update(&mut user, update, password_hash);

    let user = state.users.update(user).await?;
    Ok(user.into())
}

/// Current identity's profile
pub async fn my_profile(Extension(ctx): Extension<AuthContext>) -> Json<UserResponse> {
    Json(ctx.0)
}

pub async fn update_my_profile(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<UserUpdate>,
) -> Result<Json<UserResponse>> {
    Ok(Json(update_by_id(&state, ctx.id(), req).await?))
}

/// List all identities (manage:user only)
pub async fn list_users(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<UserResponse>>> {
    require_manage(&ctx)?;

    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let users = state.users.list().await;
    Ok(Json(
        users
            .into_iter()
            .filter(|u| query.role.is_none_or(|r| u.role == r))
            .skip(query.skip)
            .take(limit)
            .map(UserResponse::from)
            .collect(),
    ))
}

/// Fetch an identity: admin, or one's own record
pub async fn get_user(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>> {
    require_manage_or_self(&ctx, id)?;

    let user = state.users.find_by_id(id).await.ok_or_else(not_found)?;
    Ok(Json(user.into()))
}

/// Update an identity: admin, or one's own record. There is no role field
/// to update, so self-service cannot escalate.
pub async fn update_user(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
    Json(req): Json<UserUpdate>,
) -> Result<Json<UserResponse>> {
    require_manage_or_self(&ctx, id)?;
    Ok(Json(update_by_id(&state, id, req).await?))
}

/// Delete an identity (manage:user). Self-deletion is refused for any role.
pub async fn delete_user(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_manage(&ctx)?;

    if ctx.id() == id {
        return Err(Error::BadRequest(
            "Cannot delete your own account".to_string(),
        ));
    }

    state.users.remove(id).await.ok_or_else(not_found)?;
    Ok(Json(json!({ "message": "User deleted successfully" })))
}

pub async fn activate_user(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_manage(&ctx)?;

    let mut user = state.users.find_by_id(id).await.ok_or_else(not_found)?;
    user.is_active = true;
    user.updated_at = chrono::Utc::now();
    state.users.update(user).await?;

    Ok(Json(json!({ "message": "User activated successfully" })))
}

/// Deactivate an identity (manage:user). Self-deactivation is refused.
pub async fn deactivate_user(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_manage(&ctx)?;

    if ctx.id() == id {
        return Err(Error::BadRequest(
            "Cannot deactivate your own account".to_string(),
        ));
    }

    let mut user = state.users.find_by_id(id).await.ok_or_else(not_found)?;
    user.is_active = false;
    user.updated_at = chrono::Utc::now();
    state.users.update(user).await?;

    Ok(Json(json!({ "message": "User deactivated successfully" })))
}
