//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Post;
use blog_core::error::DomainError;
use blog_core::traits::{PostRepository, RepoResult};
use blog_core::value_objects::{CategoryId, Page, PageRequest, PostId, PostSortField, Sort};

use crate::mappers::{sort_column, PostInsert, PostUpdate};
use crate::models::PostModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// ORDER BY clause for a sort, with id as the tie breaker
fn order_by(sort: Sort) -> String {
    let direction = if sort.direction.is_ascending() {
        "ASC"
    } else {
        "DESC"
    };

    if sort.field == PostSortField::Id {
        format!("id {direction}")
    } else {
        format!("{} {direction}, id ASC", sort_column(sort.field))
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, description, content, category_id
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Post>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let sql = format!(
            "SELECT id, title, description, content, category_id FROM posts ORDER BY {} LIMIT $1 OFFSET $2",
            order_by(request.sort)
        );

        let rows = sqlx::query_as::<_, PostModel>(&sql)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let content = rows.into_iter().map(Post::from).collect();
        Ok(Page::new(content, &request, total.max(0) as u64))
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, description, content, category_id
            FROM posts
            WHERE category_id = $1
            ORDER BY id
            ",
        )
        .bind(category_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: PostId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, post), fields(category_id = %post.category_id))]
    async fn create(&self, post: &Post) -> RepoResult<Post> {
        let params = PostInsert::new(post);

        let created = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (title, description, content, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, content, category_id
            ",
        )
        .bind(params.title)
        .bind(params.description)
        .bind(params.content)
        .bind(params.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::category_not_found(post.category_id)))?;

        Ok(created.into())
    }

    #[instrument(skip(self, post), fields(id = %post.id))]
    async fn update(&self, post: &Post) -> RepoResult<Post> {
        let params = PostUpdate::new(post);

        let updated = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET title = $2, description = $3, content = $4, category_id = $5
            WHERE id = $1
            RETURNING id, title, description, content, category_id
            ",
        )
        .bind(params.id)
        .bind(params.title)
        .bind(params.description)
        .bind(params.content)
        .bind(params.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::category_not_found(post.category_id)))?;

        updated
            .map(Post::from)
            .ok_or_else(|| DomainError::post_not_found(post.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::post_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
