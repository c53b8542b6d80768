//! HTTP API tests driven through the router in-process
//!
//! Each test constructs an isolated AppState, so fixtures are fresh and
//! nothing leaks between tests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use inkpress::api::{create_router, AppState, SharedState};
use inkpress::Config;

fn setup() -> (SharedState, Router) {
    let state = Arc::new(AppState::new(Config::default()).expect("state"));
    let router = create_router(state.clone());
    (state, router)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(router: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        router,
        send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["access_token"].as_str().expect("token").to_string()
}

async fn register_and_login(router: &Router, username: &str, email: &str) -> String {
    let (status, _) = send(
        router,
        send_json(
            "POST",
            "/api/auth/register",
            None,
            &json!({ "username": username, "email": email, "password": "pw12345" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    login(router, email, "pw12345").await
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_, router) = setup();
    let (status, body) = send(&router, get("/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_admin_login_issues_decodable_token() {
    let (state, router) = setup();
    let (status, body) = send(
        &router,
        send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": "admin@blog.com", "password": "admin123" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().unwrap();
    assert_eq!(state.tokens.verify(token).unwrap(), "admin@blog.com");
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let (_, router) = setup();
    let (status, _) = send(
        &router,
        send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": "admin@blog.com", "password": "nope" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let (_, router) = setup();
    let payload = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "pw12345"
    });

    let (status, body) = send(
        &router,
        send_json("POST", "/api/auth/register", None, &payload),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "user");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    let (status, body) = send(
        &router,
        send_json("POST", "/api/auth/register", None, &payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Email already registered");

    // First registration unaffected
    let token = login(&router, "alice@example.com", "pw12345").await;
    let (status, body) = send(&router, get("/api/auth/me", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn test_me_requires_valid_token() {
    let (state, router) = setup();

    let (status, _) = send(&router, get("/api/auth/me", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&router, get("/api/auth/me", Some("not.a.token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let expired = state
        .tokens
        .issue_with_ttl("admin@blog.com", chrono::Duration::minutes(-5))
        .unwrap();
    let (status, _) = send(&router, get("/api/auth/me", Some(&expired))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_vanished_identity_is_unauthorized() {
    let (state, router) = setup();
    let ghost = state.tokens.issue("ghost@example.com").unwrap();
    let (status, _) = send(&router, get("/api/auth/me", Some(&ghost))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_issues_new_valid_token() {
    let (state, router) = setup();
    let token = login(&router, "admin@blog.com", "admin123").await;

    let (status, body) = send(
        &router,
        send_json("POST", "/api/auth/refresh", Some(&token), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let refreshed = body["access_token"].as_str().unwrap();
    assert_eq!(state.tokens.verify(refreshed).unwrap(), "admin@blog.com");
}

#[tokio::test]
async fn test_category_create_denied_for_user_role() {
    let (state, router) = setup();
    let token = register_and_login(&router, "bob", "bob@example.com").await;
    let before = state.categories.count().await;

    let (status, _) = send(
        &router,
        send_json(
            "POST",
            "/api/categories",
            Some(&token),
            &json!({ "name": "Forbidden Category" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(state.categories.count().await, before);
}

#[tokio::test]
async fn test_category_create_allowed_for_admin() {
    let (_, router) = setup();
    let token = login(&router, "admin@blog.com", "admin123").await;

    let (status, body) = send(
        &router,
        send_json(
            "POST",
            "/api/categories",
            Some(&token),
            &json!({ "name": "Open Source" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "open-source");
    assert_eq!(body["is_active"], true);
}

#[tokio::test]
async fn test_missing_post_is_404_without_side_effects() {
    let (state, router) = setup();
    let before = state.posts.count().await;

    let (status, body) = send(&router, get("/api/posts/999", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Post not found");
    assert_eq!(state.posts.count().await, before);
}

#[tokio::test]
async fn test_post_view_count_increments_on_read() {
    let (_, router) = setup();
    let (_, first) = send(&router, get("/api/posts/1", None)).await;
    let (_, second) = send(&router, get("/api/posts/1", None)).await;
    assert_eq!(
        second["view_count"].as_i64().unwrap(),
        first["view_count"].as_i64().unwrap() + 1
    );
}

#[tokio::test]
async fn test_post_search_filter() {
    let (_, router) = setup();
    let (status, body) = send(&router, get("/api/posts?search=artificial", None)).await;
    assert_eq!(status, StatusCode::OK);
    let posts = body.as_array().unwrap();
    assert!(!posts.is_empty());
    assert!(posts
        .iter()
        .all(|p| p["title"].as_str().unwrap().to_lowercase().contains("artificial")));
}

#[tokio::test]
async fn test_user_role_cannot_edit_someone_elses_post() {
    let (_, router) = setup();
    let token = register_and_login(&router, "carol", "carol@example.com").await;

    // Post 1 belongs to the admin fixture
    let (status, _) = send(
        &router,
        send_json(
            "PUT",
            "/api/posts/1",
            Some(&token),
            &json!({ "title": "Hijacked" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_owner_can_edit_own_post() {
    let (_, router) = setup();
    let token = register_and_login(&router, "dave", "dave@example.com").await;

    let (status, created) = send(
        &router,
        send_json(
            "POST",
            "/api/posts",
            Some(&token),
            &json!({ "title": "Dave's Notes", "content": "hello" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "draft");

    let id = created["id"].as_i64().unwrap();
    let (status, updated) = send(
        &router,
        send_json(
            "PUT",
            &format!("/api/posts/{}", id),
            Some(&token),
            &json!({ "status": "published" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "published");
    assert!(!updated["published_at"].is_null());
}

#[tokio::test]
async fn test_comment_approval_follows_role() {
    let (_, router) = setup();

    let admin = login(&router, "admin@blog.com", "admin123").await;
    let (_, by_admin) = send(
        &router,
        send_json(
            "POST",
            "/api/comments",
            Some(&admin),
            &json!({ "content": "From the admin", "post_id": 1 }),
        ),
    )
    .await;
    assert_eq!(by_admin["is_approved"], true);

    let user = register_and_login(&router, "eve", "eve@example.com").await;
    let (_, by_user) = send(
        &router,
        send_json(
            "POST",
            "/api/comments",
            Some(&user),
            &json!({ "content": "From a user", "post_id": 1 }),
        ),
    )
    .await;
    assert_eq!(by_user["is_approved"], false);

    // Pending moderation queue is moderator-only
    let (status, _) = send(&router, get("/api/comments/pending", Some(&user))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, pending) = send(&router, get("/api/comments/pending", Some(&admin))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_comment_count_tracks_create_and_delete() {
    let (state, router) = setup();
    let admin = login(&router, "admin@blog.com", "admin123").await;
    let before = state.posts.find_by_id(1).await.unwrap().comment_count;

    let (_, comment) = send(
        &router,
        send_json(
            "POST",
            "/api/comments",
            Some(&admin),
            &json!({ "content": "counted", "post_id": 1 }),
        ),
    )
    .await;
    assert_eq!(
        state.posts.find_by_id(1).await.unwrap().comment_count,
        before + 1
    );

    let id = comment["id"].as_i64().unwrap();
    let (status, _) = send(
        &router,
        send_json("DELETE", &format!("/api/comments/{}", id), Some(&admin), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.posts.find_by_id(1).await.unwrap().comment_count, before);
}

#[tokio::test]
async fn test_self_protection_invariants() {
    let (_, router) = setup();
    let admin = login(&router, "admin@blog.com", "admin123").await;

    // Admin fixture has id 1
    let (status, body) = send(
        &router,
        send_json("POST", "/api/users/1/deactivate", Some(&admin), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Cannot deactivate your own account");

    let (status, body) = send(
        &router,
        send_json("DELETE", "/api/users/1", Some(&admin), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Cannot delete your own account");

    // Still able to authenticate afterwards
    let (status, _) = send(&router, get("/api/auth/me", Some(&admin))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_user_management_requires_permission() {
    let (_, router) = setup();
    let user = register_and_login(&router, "frank", "frank@example.com").await;

    let (status, _) = send(&router, get("/api/users", Some(&user))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = login(&router, "admin@blog.com", "admin123").await;
    let (status, body) = send(&router, get("/api/users", Some(&admin))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().len() >= 2);
}

#[tokio::test]
async fn test_admin_can_deactivate_other_then_login_rejected() {
    let (_, router) = setup();
    register_and_login(&router, "grace", "grace@example.com").await;
    let admin = login(&router, "admin@blog.com", "admin123").await;

    // Registered users get id 2 (admin fixture is 1)
    let (status, _) = send(
        &router,
        send_json("POST", "/api/users/2/deactivate", Some(&admin), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &router,
        send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": "grace@example.com", "password": "pw12345" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Inactive user");
}

#[tokio::test]
async fn test_category_delete_deactivates() {
    let (state, router) = setup();
    let admin = login(&router, "admin@blog.com", "admin123").await;

    let (status, _) = send(
        &router,
        send_json("DELETE", "/api/categories/5", Some(&admin), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Soft delete: record still present, hidden from the active listing
    assert!(!state.categories.find_by_id(5).await.unwrap().is_active);
    let (_, listed) = send(&router, get("/api/categories", None)).await;
    assert!(listed
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["id"].as_i64() != Some(5)));
}

#[tokio::test]
async fn test_stats_reflect_fixture_counts() {
    let (_, router) = setup();
    let (status, body) = send(&router, get("/api/stats", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_posts"], 3);
    assert_eq!(body["total_categories"], 5);
    assert_eq!(body["total_comments"], 3);
    assert_eq!(body["total_users"], 1);
}

#[tokio::test]
async fn test_ai_generate_content_is_canned() {
    let (_, router) = setup();
    let (status, body) = send(
        &router,
        send_json(
            "POST",
            "/api/ai/generate-content",
            None,
            &json!({ "prompt": "Rust web services", "content_type": "title" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_ai_generated"], true);
    assert_eq!(body["model_used"], "mock-ai-model");
    assert!(body["generated_content"]
        .as_str()
        .unwrap()
        .contains("Rust web services"));
}

#[tokio::test]
async fn test_profile_update_and_email_move() {
    let (_, router) = setup();
    let token = register_and_login(&router, "henry", "henry@example.com").await;

    let (status, body) = send(
        &router,
        send_json(
            "PUT",
            "/api/users/me",
            Some(&token),
            &json!({ "bio": "hello", "email": "henry2@example.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bio"], "hello");
    assert_eq!(body["email"], "henry2@example.com");

    // The old token still carries the old subject, which no longer resolves
    let (status, _) = send(&router, get("/api/auth/me", Some(&token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // New credentials work against the new email
    let (status, _) = send(
        &router,
        send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "email": "henry2@example.com", "password": "pw12345" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_lowercase_bearer_scheme_authenticates() {
    let (_, router) = setup();
    let token = login(&router, "admin@blog.com", "admin123").await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("Authorization", format!("bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "admin@blog.com");
}

#[tokio::test]
async fn test_unauthorized_responses_set_www_authenticate() {
    let (_, router) = setup();
    let response = router
        .clone()
        .oneshot(get("/api/auth/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get("WWW-Authenticate").unwrap(),
        "Bearer"
    );
}
