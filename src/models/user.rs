//! Identity records and auth request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access
    Admin,
    /// Can write any post, manage categories and moderate comments
    Editor,
    /// Can only write and edit their own posts
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Editor => write!(f, "editor"),
            Role::User => write!(f, "user"),
        }
    }
}

/// A registered identity. The email is the unique lookup key.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. Convert to [`UserResponse`] instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// bcrypt hash, comparison-only
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified identity with the default role. The id is
    /// assigned by the store on insert.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            username,
            email,
            password_hash,
            first_name: None,
            last_name: None,
            bio: None,
            avatar_url: None,
            role: Role::User,
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Registration payload
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Profile update payload. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub password: Option<String>,
}

/// Login credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login/refresh response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Identity as returned to clients: everything except the credential secret
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            role: user.role,
            is_active: user.is_active,
            is_verified: user.is_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Editor.to_string(), "editor");
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        );
        assert_eq!(user.role, Role::User);
        assert!(user.is_active);
        assert!(!user.is_verified);
    }

    #[test]
    fn test_response_has_no_secret() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        );
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["role"], "user");
    }
}
