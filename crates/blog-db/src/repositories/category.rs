//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Category;
use blog_core::error::DomainError;
use blog_core::traits::{CategoryRepository, RepoResult};
use blog_core::value_objects::CategoryId;

use crate::mappers::{CategoryInsert, CategoryUpdate};
use crate::models::CategoryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description
            FROM categories
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description
            FROM categories
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: CategoryId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, category), fields(name = %category.name))]
    async fn create(&self, category: &Category) -> RepoResult<Category> {
        let params = CategoryInsert::new(category);

        let created = sqlx::query_as::<_, CategoryModel>(
            r"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            ",
        )
        .bind(params.name)
        .bind(params.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(created.into())
    }

    #[instrument(skip(self, category), fields(id = %category.id))]
    async fn update(&self, category: &Category) -> RepoResult<Category> {
        let params = CategoryUpdate::new(category);

        let updated = sqlx::query_as::<_, CategoryModel>(
            r"
            UPDATE categories
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING id, name, description
            ",
        )
        .bind(params.id)
        .bind(params.name)
        .bind(params.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        updated
            .map(Category::from)
            .ok_or_else(|| DomainError::category_not_found(category.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CategoryId) -> RepoResult<()> {
        // Dependents first, so the cascade does not rely on the schema alone
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM comments
            WHERE post_id IN (SELECT id FROM posts WHERE category_id = $1)
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM posts WHERE category_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::category_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
