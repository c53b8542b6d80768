//! Bearer-token authentication middleware
//!
//! Per-request flow: extract the `Authorization: Bearer` token, verify it,
//! resolve the subject through the credential store, and attach the resolved
//! identity (minus its secret) to the request extensions. Any failure is a
//! 401; there is no anonymous fallback.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::api::server::SharedState;
use crate::error::{Error, Result};
use crate::models::{Role, UserResponse};

/// The per-request resolved identity, destroyed with the request
#[derive(Debug, Clone)]
pub struct AuthContext(pub UserResponse);

impl AuthContext {
    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

/// Pull the token out of the Authorization header. The scheme is matched
/// case-insensitively, so `bearer <token>` authenticates too.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let (scheme, token) = headers.get("Authorization")?.to_str().ok()?.split_once(' ')?;
    scheme.eq_ignore_ascii_case("Bearer").then_some(token)
}

/// Middleware guarding the authenticated sub-router
pub async fn require_auth(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| Error::Unauthorized("Not authenticated".to_string()))?;

    let subject = state.tokens.verify(token)?;

    // Token valid but backing record missing: the identity vanished
    let user = state
        .users
        .find_by_email(&subject)
        .await
        .ok_or_else(|| Error::Unauthorized("User not found".to_string()))?;

    req.extensions_mut().insert(AuthContext(user.into()));
    Ok(next.run(req).await)
}
