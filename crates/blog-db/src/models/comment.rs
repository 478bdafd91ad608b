//! Comment database model

use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: i64,
}
