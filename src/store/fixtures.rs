//! Fixture data seeded into the in-memory stores at startup

use chrono::Utc;

use crate::auth::password::hash_password;
use crate::error::Result;
use crate::models::{Category, Comment, Post, PostStatus, Role, User};

/// The seeded administrator account credentials
pub const ADMIN_EMAIL: &str = "admin@blog.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Seed identities: a single admin account
pub fn users() -> Result<Vec<User>> {
    let now = Utc::now();
    Ok(vec![User {
        id: 1,
        username: "admin".to_string(),
        email: ADMIN_EMAIL.to_string(),
        password_hash: hash_password(ADMIN_PASSWORD)?,
        first_name: Some("Admin".to_string()),
        last_name: Some("User".to_string()),
        bio: None,
        avatar_url: None,
        role: Role::Admin,
        is_active: true,
        is_verified: true,
        created_at: now,
        updated_at: now,
    }])
}

fn post(
    id: i64,
    title: &str,
    slug: &str,
    content: &str,
    excerpt: &str,
    status: PostStatus,
    category_id: i64,
    tags: &[&str],
    counts: (i64, i64, i64, i64),
    is_featured: bool,
) -> Post {
    let now = Utc::now();
    let (view_count, like_count, comment_count, share_count) = counts;
    Post {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        content: content.to_string(),
        excerpt: Some(excerpt.to_string()),
        status,
        post_type: "text".to_string(),
        author_id: 1,
        category_id: Some(category_id),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        featured_image: None,
        view_count,
        like_count,
        comment_count,
        share_count,
        is_featured,
        is_ai_generated: false,
        meta_description: Some(excerpt.to_string()),
        meta_keywords: Some(tags.join(", ")),
        published_at: (status == PostStatus::Published).then_some(now),
        created_at: now,
        updated_at: now,
    }
}

/// Seed posts: two published, one draft
pub fn posts() -> Vec<Post> {
    vec![
        post(
            1,
            "An Introduction to Artificial Intelligence",
            "introduction-to-artificial-intelligence",
            "Artificial intelligence is one of the fastest-moving fields of our time. \
             This article walks through its history, core techniques and everyday applications.",
            "Explore the world of AI and how it is changing daily life",
            PostStatus::Published,
            1,
            &["ai", "technology", "machine-learning"],
            (1250, 89, 23, 15),
            true,
        ),
        post(
            2,
            "Best Practices for Modern Web Development",
            "best-practices-web-development",
            "Building web applications well means following established practices: \
             version control, automated testing, sensible deployment pipelines and more.",
            "Learn the practices and tooling behind modern web applications",
            PostStatus::Published,
            2,
            &["development", "web", "programming"],
            (980, 67, 15, 8),
            false,
        ),
        post(
            3,
            "Modern UI Design",
            "modern-ui-design",
            "User interface design keeps evolving. This draft collects notes on layout, \
             color and accessibility.",
            "A practical guide to designing approachable interfaces",
            PostStatus::Draft,
            3,
            &["design", "ui", "ux"],
            (0, 0, 0, 0),
            false,
        ),
    ]
}

fn category(id: i64, name: &str, slug: &str, description: &str, color: &str, icon: &str) -> Category {
    let now = Utc::now();
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
        color: color.to_string(),
        icon: Some(icon.to_string()),
        parent_id: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(
            1,
            "Technology",
            "technology",
            "Articles about technology and programming",
            "#3b82f6",
            "fas fa-laptop-code",
        ),
        category(
            2,
            "Artificial Intelligence",
            "artificial-intelligence",
            "Articles about AI and machine learning",
            "#8b5cf6",
            "fas fa-robot",
        ),
        category(
            3,
            "Development",
            "development",
            "Articles about software development",
            "#10b981",
            "fas fa-code",
        ),
        category(
            4,
            "Design",
            "design",
            "Articles about design and interfaces",
            "#f59e0b",
            "fas fa-palette",
        ),
        category(
            5,
            "Business",
            "business",
            "Articles about entrepreneurship and business",
            "#ef4444",
            "fas fa-briefcase",
        ),
    ]
}

fn comment(id: i64, post_id: i64, user_id: Option<i64>, parent_id: Option<i64>, content: &str) -> Comment {
    let now = Utc::now();
    Comment {
        id,
        post_id,
        user_id,
        parent_id,
        content: content.to_string(),
        is_approved: true,
        is_ai_generated: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn comments() -> Vec<Comment> {
    vec![
        comment(
            1,
            1,
            Some(1),
            None,
            "Great and very useful article, thanks for the valuable information!",
        ),
        comment(
            2,
            1,
            None,
            None,
            "Could you write an article about AI applications in medicine?",
        ),
        comment(
            3,
            1,
            Some(1),
            Some(2),
            "Yes, I will write about that soon. Thanks for the suggestion!",
        ),
    ]
}
