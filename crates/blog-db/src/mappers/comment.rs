//! Comment entity <-> model mapper

use blog_core::entities::Comment;
use blog_core::value_objects::{CommentId, PostId};

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            name: model.name,
            email: model.email,
            body: model.body,
            post_id: PostId::new(model.post_id),
        }
    }
}

/// Convert Comment entity reference to values for database insertion
pub struct CommentInsert<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub body: &'a str,
    pub post_id: i64,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            name: &comment.name,
            email: &comment.email,
            body: &comment.body,
            post_id: comment.post_id.into_inner(),
        }
    }
}

/// Convert Comment entity reference to values for database update
///
/// The owning post is never changed by an update.
pub struct CommentUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub body: &'a str,
}

impl<'a> CommentUpdate<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            name: &comment.name,
            email: &comment.email,
            body: &comment.body,
        }
    }
}
