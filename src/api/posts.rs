//! Post endpoints

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::middleware::AuthContext;
use crate::auth::policy::{allowed, allowed_on_owned, Action};
use crate::error::{Error, Result};
use crate::models::{Post, PostCreate, PostStatus, PostSummary, PostUpdate};

use super::server::SharedState;

#[derive(Debug, Deserialize)]
pub struct PostQuery {
    #[serde(default)]
    pub skip: usize,
    pub limit: Option<usize>,
    pub status: Option<PostStatus>,
    pub category_id: Option<i64>,
    pub featured: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

fn not_found() -> Error {
    Error::NotFound("Post not found".to_string())
}

/// List posts with optional filtering and pagination
pub async fn list_posts(
    State(state): State<SharedState>,
    Query(query): Query<PostQuery>,
) -> Json<Vec<PostSummary>> {
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let search = query.search.as_ref().map(|s| s.to_lowercase());

    let posts = state
        .posts
        .find(|p| {
            query.status.is_none_or(|s| p.status == s)
                && query.category_id.is_none_or(|c| p.category_id == Some(c))
                && query.featured.is_none_or(|f| p.is_featured == f)
                && search.as_ref().is_none_or(|needle| {
                    p.title.to_lowercase().contains(needle)
                        || p.content.to_lowercase().contains(needle)
                        || p.excerpt
                            .as_ref()
                            .is_some_and(|e| e.to_lowercase().contains(needle))
                })
        })
        .await;

    Json(
        posts
            .into_iter()
            .skip(query.skip)
            .take(limit)
            .map(PostSummary::from)
            .collect(),
    )
}

/// Fetch a post by id, counting the view
pub async fn get_post(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>> {
    let post = state
        .posts
        .update(id, |p| p.view_count += 1)
        .await
        .ok_or_else(not_found)?;
    Ok(Json(post))
}

/// Fetch a post by slug, counting the view
pub async fn get_post_by_slug(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<Post>> {
    let post = state
        .posts
        .find_first(|p| p.slug == slug)
        .await
        .ok_or_else(not_found)?;
    let post = state
        .posts
        .update(post.id, |p| p.view_count += 1)
        .await
        .ok_or_else(not_found)?;
    Ok(Json(post))
}

/// Featured published posts
pub async fn featured_posts(
    State(state): State<SharedState>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<PostSummary>> {
    let limit = query.limit.unwrap_or(5).clamp(1, 20);
    let posts = state
        .posts
        .find(|p| p.is_featured && p.status == PostStatus::Published)
        .await;
    Json(posts.into_iter().take(limit).map(PostSummary::from).collect())
}

/// Recent published posts, newest first
pub async fn recent_posts(
    State(state): State<SharedState>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<PostSummary>> {
    let limit = query.limit.unwrap_or(10).clamp(1, 50);
    let mut posts = state
        .posts
        .find(|p| p.status == PostStatus::Published)
        .await;
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    Json(posts.into_iter().take(limit).map(PostSummary::from).collect())
}

/// Create a draft post owned by the caller
pub async fn create_post(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<PostCreate>,
) -> Result<Json<Post>> {
    if !allowed(ctx.role(), Action::WritePostOwn) && !allowed(ctx.role(), Action::WritePostAny) {
        return Err(Error::Forbidden("Not enough permissions".to_string()));
    }

    let post = state.posts.insert(Post::from_create(req, ctx.id())).await;
    Ok(Json(post))
}

/// Update a post: owner, or a role holding the any-post permission
pub async fn update_post(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
    Json(req): Json<PostUpdate>,
) -> Result<Json<Post>> {
    let post = state.posts.find_by_id(id).await.ok_or_else(not_found)?;

    if !allowed_on_owned(ctx.role(), Action::WritePostAny, ctx.id(), Some(post.author_id)) {
        return Err(Error::Forbidden("Not enough permissions".to_string()));
    }

    let post = state
        .posts
        .update(id, |p| p.apply_update(req))
        .await
        .ok_or_else(not_found)?;
    Ok(Json(post))
}

/// Delete a post: owner, or a role holding the any-post permission
pub async fn delete_post(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let post = state.posts.find_by_id(id).await.ok_or_else(not_found)?;

    if !allowed_on_owned(ctx.role(), Action::WritePostAny, ctx.id(), Some(post.author_id)) {
        return Err(Error::Forbidden("Not enough permissions".to_string()));
    }

    state.posts.delete(id).await;
    Ok(Json(json!({ "message": "Post deleted successfully" })))
}

pub async fn like_post(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let post = state
        .posts
        .update(id, |p| p.like_count += 1)
        .await
        .ok_or_else(not_found)?;
    Ok(Json(json!({
        "message": "Post liked successfully",
        "like_count": post.like_count
    })))
}

pub async fn share_post(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let post = state
        .posts
        .update(id, |p| p.share_count += 1)
        .await
        .ok_or_else(not_found)?;
    Ok(Json(json!({
        "message": "Post shared successfully",
        "share_count": post.share_count
    })))
}
