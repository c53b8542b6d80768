//! Error types for Inkpress

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing, invalid or expired token, or a subject that no longer resolves
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but the policy denies the action
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique key on create, reported to clients as 400
    #[error("{0}")]
    Conflict(String),

    /// Invalid state transition (inactive login, self-delete, ...)
    #[error("{0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found")]
    ConfigNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match status {
            // Never leak internal details to clients
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("internal error: {}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };
        let body = Json(serde_json::json!({ "detail": message }));

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
