//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and post paging.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::PostPaging;
pub use path::IdPath;
pub use validated::ValidatedJson;
