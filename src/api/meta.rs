//! Service banner, health, stats and feature-map endpoints

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::server::SharedState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Inkpress publishing API is running",
        "version": VERSION,
        "features": [
            "Authentication",
            "Posts Management",
            "Categories",
            "Comments",
            "AI Features",
            "User Management"
        ]
    }))
}

pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": VERSION,
        "features_enabled": {
            "ai_features": state.config.ai.enabled,
            "authentication": true
        }
    }))
}

/// Live counts straight from the repositories
pub async fn stats(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "total_posts": state.posts.count().await,
        "total_categories": state.categories.count().await,
        "total_users": state.users.count().await,
        "total_comments": state.comments.count().await,
        "api_version": VERSION
    }))
}

pub async fn features(State(state): State<SharedState>) -> impl IntoResponse {
    let ai = state.config.ai.enabled;
    Json(json!({
        "authentication": {
            "login": true,
            "register": true,
            "jwt_tokens": true,
            "password_reset": false
        },
        "posts": {
            "create": true,
            "read": true,
            "update": true,
            "delete": true,
            "search": true,
            "filtering": true
        },
        "categories": {
            "create": true,
            "read": true,
            "update": true,
            "delete": true,
            "hierarchy": true
        },
        "comments": {
            "create": true,
            "read": true,
            "update": true,
            "delete": true,
            "approval": true,
            "nested": true
        },
        "ai_features": {
            "content_generation": ai,
            "translation": ai,
            "grammar_check": ai,
            "image_generation": ai,
            "speech_to_text": ai,
            "text_to_speech": ai
        }
    }))
}
