//! Entity to model mappers
//!
//! This module provides conversions between domain entities (blog-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod category;
mod comment;
mod post;

pub use category::{CategoryInsert, CategoryUpdate};
pub use comment::{CommentInsert, CommentUpdate};
pub use post::{sort_column, PostInsert, PostUpdate};
