//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business rules and orchestration of repository calls.

pub mod category;
pub mod comment;
pub mod context;
pub mod error;
pub mod post;

// Re-export all services for convenience
pub use category::CategoryService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
