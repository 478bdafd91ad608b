//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Comment;
use blog_core::error::DomainError;
use blog_core::traits::{CommentRepository, RepoResult};
use blog_core::value_objects::{CommentId, PostId};

use crate::mappers::{CommentInsert, CommentUpdate};
use crate::models::CommentModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, name, email, body, post_id
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, name, email, body, post_id
            FROM comments
            WHERE post_id = $1
            ORDER BY id
            ",
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, post_ids), fields(posts = post_ids.len()))]
    async fn find_by_posts(&self, post_ids: &[PostId]) -> RepoResult<Vec<Comment>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = post_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, name, email, body, post_id
            FROM comments
            WHERE post_id = ANY($1)
            ORDER BY post_id, id
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(post_id = %comment.post_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<Comment> {
        let params = CommentInsert::new(comment);

        let created = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (name, email, body, post_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, body, post_id
            ",
        )
        .bind(params.name)
        .bind(params.email)
        .bind(params.body)
        .bind(params.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::post_not_found(comment.post_id)))?;

        Ok(created.into())
    }

    #[instrument(skip(self, comment), fields(id = %comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<Comment> {
        let params = CommentUpdate::new(comment);

        let updated = sqlx::query_as::<_, CommentModel>(
            r"
            UPDATE comments
            SET name = $2, email = $3, body = $4
            WHERE id = $1
            RETURNING id, name, email, body, post_id
            ",
        )
        .bind(params.id)
        .bind(params.name)
        .bind(params.email)
        .bind(params.body)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        updated
            .map(Comment::from)
            .ok_or_else(|| DomainError::comment_not_found(comment.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::comment_not_found(id));
        }

        Ok(())
    }
}
