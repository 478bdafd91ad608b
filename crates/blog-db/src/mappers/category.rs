//! Category entity <-> model mapper

use blog_core::entities::Category;
use blog_core::value_objects::CategoryId;

use crate::models::CategoryModel;

/// Convert CategoryModel to Category entity
impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: CategoryId::new(model.id),
            name: model.name,
            description: model.description,
        }
    }
}

/// Convert Category entity reference to values for database insertion
pub struct CategoryInsert<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> CategoryInsert<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self {
            name: &category.name,
            description: &category.description,
        }
    }
}

/// Convert Category entity reference to values for database update
pub struct CategoryUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> CategoryUpdate<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self {
            id: category.id.into_inner(),
            name: &category.name,
            description: &category.description,
        }
    }
}
