//! HTTP API

pub mod ai;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod meta;
pub mod posts;
pub mod server;
pub mod users;

pub use server::{create_router, run_server, AppState, SharedState};
