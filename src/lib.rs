//! Inkpress - mock content-publishing backend
//!
//! An in-memory publishing API: authentication with bearer tokens, posts,
//! categories, comments, user management and canned AI endpoints. Nothing
//! is persisted; every store is seeded with fixture data at startup.

pub mod ai;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::Error;
