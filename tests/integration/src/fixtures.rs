//! Test fixtures and data generators
//!
//! Provides reusable request payloads for integration tests.

use blog_service::dto::{CategoryDto, CommentDto, PostDto};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn category_request(name: &str, description: &str) -> CategoryDto {
    CategoryDto {
        id: None,
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Category payload with a name no other test uses
pub fn unique_category() -> CategoryDto {
    category_request(&format!("Category {}", unique_suffix()), "Test category")
}

pub fn post_request(title: &str, category_id: i64) -> PostDto {
    PostDto {
        id: None,
        title: title.to_string(),
        description: format!("About {title}"),
        content: format!("Body of {title}"),
        category_id,
        comments: vec![],
    }
}

/// Post payload with a title no other test uses
pub fn unique_post(category_id: i64) -> PostDto {
    post_request(&format!("Post {}", unique_suffix()), category_id)
}

pub fn comment_request(name: &str, body: &str) -> CommentDto {
    CommentDto {
        id: None,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        body: body.to_string(),
    }
}

/// Comment payload from a unique commenter
pub fn unique_comment() -> CommentDto {
    comment_request(&format!("Reader {}", unique_suffix()), "Nice post")
}
