//! Resource DTOs
//!
//! The same shape is accepted on create/update and returned to clients.
//! Ids in a request body are ignored; the path decides which resource is addressed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Category payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    #[schema(example = "Tech")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Tech posts")]
    pub description: String,
}

/// Comment payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Comment body must not be empty"))]
    pub body: String,
}

/// Post payload
///
/// `comments` is filled on responses and ignored on requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "Post title must be 1-255 characters"))]
    #[schema(example = "Hello world")]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub content: String,

    #[schema(example = 1)]
    pub category_id: i64,

    #[serde(default)]
    pub comments: Vec<CommentDto>,
}
