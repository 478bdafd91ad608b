//! Category entity - a named grouping that owns posts

use crate::value_objects::CategoryId;

/// Category entity
///
/// A category exclusively owns its posts: deleting it deletes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Create a category that has not been saved yet
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: CategoryId::UNSAVED,
            name,
            description,
        }
    }

    /// Overwrite every scalar field
    pub fn overwrite(&mut self, name: String, description: String) {
        self.name = name;
        self.description = description;
    }
}
