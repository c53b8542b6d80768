//! HTTP API server

use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::ai::ContentGenerator;
use crate::auth::middleware::require_auth;
use crate::auth::TokenService;
use crate::config::Config;
use crate::error::Result;
use crate::models::{Category, Comment, Post};
use crate::store::{fixtures, Repository, UserStore};

use super::{ai, auth, categories, comments, meta, posts, users};

/// Application state shared across handlers. Repositories are constructed
/// once here and only ever reached through this handle.
pub struct AppState {
    pub config: Config,
    pub tokens: TokenService,
    pub users: UserStore,
    pub posts: Repository<Post>,
    pub categories: Repository<Category>,
    pub comments: Repository<Comment>,
    pub generator: ContentGenerator,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Build the state with fixture data loaded into every store
    pub fn new(config: Config) -> Result<Self> {
        let tokens = TokenService::new(&config.auth.secret, config.auth.token_ttl_minutes);
        Ok(Self {
            tokens,
            users: UserStore::seeded(fixtures::users()?),
            posts: Repository::seeded(fixtures::posts()),
            categories: Repository::seeded(fixtures::categories()),
            comments: Repository::seeded(fixtures::comments()),
            generator: ContentGenerator,
            config,
        })
    }
}

/// Run the HTTP API server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: SharedState) -> Router {
    let public = Router::new()
        // Meta
        .route("/", get(meta::root))
        .route("/api/health", get(meta::health))
        .route("/api/stats", get(meta::stats))
        .route("/api/features", get(meta::features))
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        // Posts (read-only)
        .route("/api/posts", get(posts::list_posts))
        .route("/api/posts/featured", get(posts::featured_posts))
        .route("/api/posts/recent", get(posts::recent_posts))
        .route("/api/posts/{id}", get(posts::get_post))
        .route("/api/posts/slug/{slug}", get(posts::get_post_by_slug))
        // Categories (read-only)
        .route("/api/categories", get(categories::list_categories))
        .route("/api/categories/{id}", get(categories::get_category))
        .route("/api/categories/slug/{slug}", get(categories::get_category_by_slug))
        .route("/api/categories/{id}/posts", get(categories::category_posts))
        // Comments (read-only)
        .route("/api/comments", get(comments::list_comments))
        .route("/api/comments/{id}", get(comments::get_comment))
        // AI
        .route("/api/ai/generate-content", post(ai::generate_content))
        .route("/api/ai/translate", post(ai::translate))
        .route("/api/ai/grammar-check", post(ai::grammar_check))
        .route("/api/ai/generate-image", post(ai::generate_image))
        .route("/api/ai/speech-to-text", post(ai::speech_to_text))
        .route("/api/ai/text-to-speech", post(ai::text_to_speech))
        .route("/api/ai/suggestions", get(ai::suggestions))
        .route("/api/ai/analytics", get(ai::analytics));

    let protected = Router::new()
        // Auth
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/refresh", post(auth::refresh))
        // Posts
        .route("/api/posts", post(posts::create_post))
        .route("/api/posts/{id}", put(posts::update_post))
        .route("/api/posts/{id}", delete(posts::delete_post))
        .route("/api/posts/{id}/like", post(posts::like_post))
        .route("/api/posts/{id}/share", post(posts::share_post))
        // Categories
        .route("/api/categories", post(categories::create_category))
        .route("/api/categories/{id}", put(categories::update_category))
        .route("/api/categories/{id}", delete(categories::delete_category))
        // Comments
        .route("/api/comments", post(comments::create_comment))
        .route("/api/comments/pending", get(comments::pending_comments))
        .route("/api/comments/{id}", put(comments::update_comment))
        .route("/api/comments/{id}", delete(comments::delete_comment))
        .route("/api/comments/{id}/approve", post(comments::approve_comment))
        .route("/api/comments/{id}/reject", post(comments::reject_comment))
        // Users
        .route("/api/users", get(users::list_users))
        .route("/api/users/me", get(users::my_profile))
        .route("/api/users/me", put(users::update_my_profile))
        .route("/api/users/{id}", get(users::get_user))
        .route("/api/users/{id}", put(users::update_user))
        .route("/api/users/{id}", delete(users::delete_user))
        .route("/api/users/{id}/activate", post(users::activate_user))
        .route("/api/users/{id}/deactivate", post(users::deactivate_user))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let cors = cors_layer(&state.config.server.allowed_origins);

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
