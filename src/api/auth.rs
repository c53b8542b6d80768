//! Authentication endpoints: register, login, me, logout, refresh

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::auth::middleware::AuthContext;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{Error, Result};
use crate::models::{LoginRequest, TokenResponse, User, UserCreate, UserResponse};

use super::server::SharedState;

/// Register a new identity with the default role
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<UserCreate>,
) -> Result<Json<UserResponse>> {
    let mut user = User::new(req.username, req.email, hash_password(&req.password)?);
    user.first_name = req.first_name;
    user.last_name = req.last_name;
    user.bio = req.bio;

    let user = state.users.insert(user).await?;
    tracing::info!("registered user {}", user.email);
    Ok(Json(user.into()))
}

/// Exchange credentials for a bearer token
pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let user = state
        .users
        .find_by_email(&req.email)
        .await
        .ok_or_else(|| Error::Unauthorized("Incorrect email or password".to_string()))?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(Error::Unauthorized(
            "Incorrect email or password".to_string(),
        ));
    }

    if !user.is_active {
        return Err(Error::BadRequest("Inactive user".to_string()));
    }

    let token = state.tokens.issue(&user.email)?;
    Ok(Json(TokenResponse::bearer(token)))
}

/// The authenticated identity, secret omitted
pub async fn me(Extension(ctx): Extension<AuthContext>) -> Json<UserResponse> {
    Json(ctx.0)
}

/// Stateless no-op: bearer tokens cannot be revoked server-side
pub async fn logout() -> impl IntoResponse {
    Json(json!({ "message": "Successfully logged out" }))
}

/// Issue a fresh access token for the authenticated identity. The prior
/// token stays valid until it expires.
pub async fn refresh(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<TokenResponse>> {
    let token = state.tokens.issue(ctx.email())?;
    Ok(Json(TokenResponse::bearer(token)))
}
