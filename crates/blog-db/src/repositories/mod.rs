//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod comment;
mod error;
mod post;

pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
