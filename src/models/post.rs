//! Post records and request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Publication state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub status: PostStatus,
    pub post_type: String,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    pub is_featured: bool,
    pub is_ai_generated: bool,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Post {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Post {
    /// Build a fresh draft from a create request
    pub fn from_create(create: PostCreate, author_id: i64) -> Self {
        let now = Utc::now();
        let slug = super::slugify(&create.title);
        Self {
            id: 0,
            title: create.title,
            slug,
            content: create.content,
            excerpt: create.excerpt,
            status: PostStatus::Draft,
            post_type: "text".to_string(),
            author_id,
            category_id: create.category_id,
            tags: create.tags,
            featured_image: None,
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            share_count: 0,
            is_featured: create.is_featured,
            is_ai_generated: false,
            meta_description: create.meta_description,
            meta_keywords: create.meta_keywords,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update in place. The slug tracks the title, and the first
    /// transition to published stamps `published_at`.
    pub fn apply_update(&mut self, update: PostUpdate) {
        if let Some(title) = update.title {
            self.slug = super::slugify(&title);
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            self.excerpt = Some(excerpt);
        }
        if let Some(category_id) = update.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(meta_description) = update.meta_description {
            self.meta_description = Some(meta_description);
        }
        if let Some(meta_keywords) = update.meta_keywords {
            self.meta_keywords = Some(meta_keywords);
        }
        if let Some(is_featured) = update.is_featured {
            self.is_featured = is_featured;
        }
        if let Some(status) = update.status {
            if status == PostStatus::Published && self.published_at.is_none() {
                self.published_at = Some(Utc::now());
            }
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category_id: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_featured: Option<bool>,
    pub status: Option<PostStatus>,
}

/// Compact shape for list endpoints
#[derive(Debug, Serialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    pub is_featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostSummary {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            author_id: post.author_id,
            category_id: post.category_id,
            view_count: post.view_count,
            like_count: post.like_count,
            comment_count: post.comment_count,
            is_featured: post.is_featured,
            published_at: post.published_at,
            created_at: post.created_at,
        }
    }
}
