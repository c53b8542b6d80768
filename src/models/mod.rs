//! Domain records and request/response types

pub mod category;
pub mod comment;
pub mod post;
pub mod user;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use comment::{Comment, CommentCreate, CommentUpdate};
pub use post::{Post, PostCreate, PostStatus, PostSummary, PostUpdate};
pub use user::{LoginRequest, Role, TokenResponse, User, UserCreate, UserResponse, UserUpdate};

/// Derive a URL slug from a title or name: lowercase, ASCII alphanumerics
/// kept, everything else collapsed to single hyphens.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_was_hyphen = true;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}
