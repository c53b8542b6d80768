//! Category endpoints

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::auth::middleware::AuthContext;
use crate::auth::policy::{allowed, Action};
use crate::error::{Error, Result};
use crate::models::{Category, CategoryCreate, CategoryUpdate, PostStatus, PostSummary};

use super::server::SharedState;

fn not_found() -> Error {
    Error::NotFound("Category not found".to_string())
}

fn require_write(ctx: &AuthContext) -> Result<()> {
    if allowed(ctx.role(), Action::WriteCategory) {
        Ok(())
    } else {
        Err(Error::Forbidden("Not enough permissions".to_string()))
    }
}

/// All active categories
pub async fn list_categories(State(state): State<SharedState>) -> Json<Vec<Category>> {
    Json(state.categories.find(|c| c.is_active).await)
}

pub async fn get_category(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>> {
    let category = state
        .categories
        .find_by_id(id)
        .await
        .ok_or_else(not_found)?;
    Ok(Json(category))
}

pub async fn get_category_by_slug(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<Category>> {
    let category = state
        .categories
        .find_first(|c| c.slug == slug)
        .await
        .ok_or_else(not_found)?;
    Ok(Json(category))
}

/// Published posts in a category
pub async fn category_posts(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<PostSummary>>> {
    state
        .categories
        .find_by_id(id)
        .await
        .ok_or_else(not_found)?;

    let posts = state
        .posts
        .find(|p| p.category_id == Some(id) && p.status == PostStatus::Published)
        .await;
    Ok(Json(posts.into_iter().map(PostSummary::from).collect()))
}

pub async fn create_category(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<CategoryCreate>,
) -> Result<Json<Category>> {
    require_write(&ctx)?;

    let category = state.categories.insert(Category::from_create(req)).await;
    Ok(Json(category))
}

pub async fn update_category(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
    Json(req): Json<CategoryUpdate>,
) -> Result<Json<Category>> {
    require_write(&ctx)?;

    let category = state
        .categories
        .update(id, |c| c.apply_update(req))
        .await
        .ok_or_else(not_found)?;
    Ok(Json(category))
}

/// Deactivate rather than remove, since posts may still reference it
pub async fn delete_category(
    State(state): State<SharedState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    require_write(&ctx)?;

    state
        .categories
        .update(id, |c| {
            c.is_active = false;
            c.updated_at = chrono::Utc::now();
        })
        .await
        .ok_or_else(not_found)?;
    Ok(Json(json!({ "message": "Category deactivated successfully" })))
}
