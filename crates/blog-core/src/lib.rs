//! # blog-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Category, Comment, Post};
pub use error::{
    DomainError, Resource, COMMENT_NOT_IN_POST_ON_READ, COMMENT_NOT_IN_POST_ON_WRITE,
};
pub use traits::{CategoryRepository, CommentRepository, PostRepository, RepoResult};
pub use value_objects::{
    CategoryId, CommentId, IdParseError, Page, PageRequest, PostId, PostSortField, Sort,
    SortDirection, UnknownSortField, DEFAULT_PAGE_NO, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
