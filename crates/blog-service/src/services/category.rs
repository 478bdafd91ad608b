//! Category service
//!
//! Handles category creation, lookup, updates, and cascading deletion.

use blog_core::entities::Category;
use blog_core::{CategoryId, Resource};
use tracing::{info, instrument};

use crate::dto::CategoryDto;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new category
    #[instrument(skip(self, request))]
    pub async fn add_category(&self, request: CategoryDto) -> ServiceResult<CategoryDto> {
        let category = Category::new(request.name, request.description);
        let created = self.ctx.category_repo().create(&category).await?;

        info!(category_id = %created.id, "Category created");

        Ok(CategoryDto::from(&created))
    }

    /// Get category by ID
    #[instrument(skip(self))]
    pub async fn get_category(&self, category_id: CategoryId) -> ServiceResult<CategoryDto> {
        let category = self.get_category_entity(category_id).await?;
        Ok(CategoryDto::from(&category))
    }

    /// List every category
    #[instrument(skip(self))]
    pub async fn get_all_categories(&self) -> ServiceResult<Vec<CategoryDto>> {
        let categories = self.ctx.category_repo().find_all().await?;
        Ok(categories.iter().map(CategoryDto::from).collect())
    }

    /// Overwrite a category; the id in the payload is ignored
    #[instrument(skip(self, request))]
    pub async fn update_category(
        &self,
        request: CategoryDto,
        category_id: CategoryId,
    ) -> ServiceResult<CategoryDto> {
        let mut category = self.get_category_entity(category_id).await?;
        category.overwrite(request.name, request.description);

        let updated = self.ctx.category_repo().update(&category).await?;

        info!(category_id = %category_id, "Category updated");

        Ok(CategoryDto::from(&updated))
    }

    /// Delete a category with its posts and their comments
    #[instrument(skip(self))]
    pub async fn delete_category(&self, category_id: CategoryId) -> ServiceResult<()> {
        if !self.ctx.category_repo().exists(category_id).await? {
            return Err(ServiceError::not_found(Resource::Category, category_id));
        }

        self.ctx.category_repo().delete(category_id).await?;

        info!(category_id = %category_id, "Category deleted");

        Ok(())
    }

    /// Get category entity by ID
    #[instrument(skip(self))]
    pub async fn get_category_entity(&self, category_id: CategoryId) -> ServiceResult<Category> {
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Category, category_id))
    }
}
