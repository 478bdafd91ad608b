//! Comment entity - a reader's reply attached to a single post

use crate::value_objects::{CommentId, PostId};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: PostId,
}

impl Comment {
    /// Create a comment that has not been saved yet
    pub fn new(name: String, email: String, body: String, post_id: PostId) -> Self {
        Self {
            id: CommentId::UNSAVED,
            name,
            email,
            body,
            post_id,
        }
    }

    /// Check whether the comment is attached to the given post
    #[inline]
    pub fn belongs_to(&self, post_id: PostId) -> bool {
        self.post_id == post_id
    }

    /// Overwrite every scalar field
    pub fn overwrite(&mut self, name: String, email: String, body: String) {
        self.name = name;
        self.email = email;
        self.body = body;
    }
}
