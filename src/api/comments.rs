//! Comment endpoints

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::middleware::AuthContext;
use crate::auth::policy::{allowed, allowed_on_owned, Action};
use crate::error::{Error, Result};
use crate::models::{Comment, CommentCreate, CommentUpdate};

use super::server::SharedState;

#[derive(Debug, Deserialize)]
pub struct CommentQuery {
    pub post_id: Option<i64>,
    #[serde(default)]
    pub skip: usize,
    pub limit: Option<usize>,
    pub approved_only: Option<bool>,
}

fn not_found() -> Error {
    Error::NotFound("Comment not found".to_string())
}

fn require_moderator(ctx: &AuthContext) -> Result<()> {
    if allowed(ctx.role(), Action::ModerateComment) {
        Ok(())
    } else {
        Err(Error::Forbidden("Not enough permissions".to_string()))
    }
}

/// List comments, approved-only by default
pub async fn list_comments(
    State(state): State<SharedState>,
    Query(query): Query<CommentQuery>,
) -> Json<Vec<Comment>> {
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let approved_only = query.approved_only.unwrap_or(true);

    let comments = state
        .comments
        .find(|c| {
            query.post_id.is_none_or(|p| c.post_id == p) && (!approved_only || c.is_approved)
        })
        .await;

    Json(comments.into_iter().skip(query.skip).take(limit).collect())
}

pub async fn get_comment(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Comment>> {
    let comment = state.comments.find_by_id(id).await.ok_or_else(not_found)?;
    Ok(Json(comment))
}

/// Create a comment; moderators are auto-approved
pub async fn create_comment(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<CommentCreate>,
) -> Result<Json<Comment>> {
    let post_id = req.post_id;
    let auto_approved = allowed(ctx.role(), Action::ModerateComment);
    let comment = state
        .comments
        .insert(Comment::from_create(req, ctx.id(), auto_approved))
        .await;

    // Keep the denormalized count in step; the post may have been deleted
    state
        .posts
        .update(post_id, |p| p.comment_count += 1)
        .await;

    Ok(Json(comment))
}

/// Update a comment: author, or a moderator role
pub async fn update_comment(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
    Json(req): Json<CommentUpdate>,
) -> Result<Json<Comment>> {
    let comment = state.comments.find_by_id(id).await.ok_or_else(not_found)?;

    if !allowed_on_owned(ctx.role(), Action::ModerateComment, ctx.id(), comment.user_id) {
        return Err(Error::Forbidden("Not enough permissions".to_string()));
    }

    let comment = state
        .comments
        .update(id, |c| {
            if let Some(content) = req.content {
                c.content = content;
            }
            c.updated_at = chrono::Utc::now();
        })
        .await
        .ok_or_else(not_found)?;
    Ok(Json(comment))
}

/// Delete a comment: author, or a moderator role
pub async fn delete_comment(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let comment = state.comments.find_by_id(id).await.ok_or_else(not_found)?;

    if !allowed_on_owned(ctx.role(), Action::ModerateComment, ctx.id(), comment.user_id) {
        return Err(Error::Forbidden("Not enough permissions".to_string()));
    }

    state.comments.delete(id).await;
    state
        .posts
        .update(comment.post_id, |p| p.comment_count = (p.comment_count - 1).max(0))
        .await;

    Ok(Json(json!({ "message": "Comment deleted successfully" })))
}

pub async fn approve_comment(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_moderator(&ctx)?;

    state
        .comments
        .update(id, |c| {
            c.is_approved = true;
            c.updated_at = chrono::Utc::now();
        })
        .await
        .ok_or_else(not_found)?;
    Ok(Json(json!({ "message": "Comment approved successfully" })))
}

pub async fn reject_comment(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_moderator(&ctx)?;

    state
        .comments
        .update(id, |c| {
            c.is_approved = false;
            c.updated_at = chrono::Utc::now();
        })
        .await
        .ok_or_else(not_found)?;
    Ok(Json(json!({ "message": "Comment rejected successfully" })))
}

/// Comments awaiting moderation
pub async fn pending_comments(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<Vec<Comment>>> {
    require_moderator(&ctx)?;
    Ok(Json(state.comments.find(|c| !c.is_approved).await))
}
