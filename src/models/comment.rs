//! Comment records and request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A comment on a post. `user_id` is None for seeded anonymous comments.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub content: String,
    pub is_approved: bool,
    pub is_ai_generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Comment {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Comment {
    /// Moderator-authored comments are approved immediately.
    pub fn from_create(create: CommentCreate, user_id: i64, auto_approved: bool) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            post_id: create.post_id,
            user_id: Some(user_id),
            parent_id: create.parent_id,
            content: create.content,
            is_approved: auto_approved,
            is_ai_generated: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentCreate {
    pub content: String,
    pub post_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CommentUpdate {
    pub content: Option<String>,
}
