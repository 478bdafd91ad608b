//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Resource DTOs, accepted as request bodies and returned as responses
//! - Query DTOs for listing endpoints
//! - Response-only DTOs (paging envelope, health)
//! - Mappers between domain entities and DTOs

pub mod mappers;
pub mod requests;
pub mod resources;
pub mod responses;

pub use mappers::PostWithComments;
pub use requests::PostPageQuery;
pub use resources::{CategoryDto, CommentDto, PostDto};
pub use responses::{HealthChecks, HealthResponse, PostPage, ReadinessResponse};
