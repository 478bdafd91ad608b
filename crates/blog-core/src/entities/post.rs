//! Post entity - an article filed under exactly one category

use crate::value_objects::{CategoryId, PostId};

/// Post entity
///
/// Always belongs to one category; owns its comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: CategoryId,
}

impl Post {
    /// Create a post that has not been saved yet
    pub fn new(
        title: String,
        description: String,
        content: String,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: PostId::UNSAVED,
            title,
            description,
            content,
            category_id,
        }
    }

    /// Check whether the post is filed under the given category
    #[inline]
    pub fn is_in_category(&self, category_id: CategoryId) -> bool {
        self.category_id == category_id
    }

    /// Move the post to another category
    pub fn reassign(&mut self, category_id: CategoryId) {
        self.category_id = category_id;
    }

    /// Overwrite every scalar field, keeping the category
    pub fn overwrite(&mut self, title: String, description: String, content: String) {
        self.title = title;
        self.description = description;
        self.content = content;
    }
}
