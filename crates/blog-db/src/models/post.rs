//! Post database model

use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: i64,
}
