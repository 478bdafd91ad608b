//! Post entity <-> model mapper

use blog_core::entities::Post;
use blog_core::value_objects::{CategoryId, PostId, PostSortField};

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            title: model.title,
            description: model.description,
            content: model.content,
            category_id: CategoryId::new(model.category_id),
        }
    }
}

/// Column backing a sortable post field
///
/// Only these fixed names are ever interpolated into ORDER BY.
pub fn sort_column(field: PostSortField) -> &'static str {
    match field {
        PostSortField::Id => "id",
        PostSortField::Title => "title",
        PostSortField::Description => "description",
        PostSortField::Content => "content",
        PostSortField::CategoryId => "category_id",
    }
}

/// Convert Post entity reference to values for database insertion
pub struct PostInsert<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub content: &'a str,
    pub category_id: i64,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            title: &post.title,
            description: &post.description,
            content: &post.content,
            category_id: post.category_id.into_inner(),
        }
    }
}

/// Convert Post entity reference to values for database update
pub struct PostUpdate<'a> {
    pub id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub content: &'a str,
    pub category_id: i64,
}

impl<'a> PostUpdate<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: post.id.into_inner(),
            title: &post.title,
            description: &post.description,
            content: &post.content,
            category_id: post.category_id.into_inner(),
        }
    }
}
