//! Domain errors - error types for the domain layer

use std::fmt;

use thiserror::Error;

use crate::value_objects::{CategoryId, CommentId, PostId, UnknownSortField};

/// Message used when reading a comment through the wrong post
pub const COMMENT_NOT_IN_POST_ON_READ: &str = "Comment does not not belong to post";

/// Message used when modifying a comment through the wrong post
pub const COMMENT_NOT_IN_POST_ON_WRITE: &str = "Comment does not belongs to post";

/// Kinds of resource a lookup can miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Category,
    Post,
    Comment,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Category => "Category",
            Self::Post => "Post",
            Self::Comment => "Comment",
        };
        f.write_str(name)
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{resource} not found with {field} : '{value}'")]
    NotFound {
        resource: Resource,
        field: &'static str,
        value: String,
    },

    // =========================================================================
    // Relationship Errors
    // =========================================================================
    #[error("{0}")]
    InvalidRelationship(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidSortField(#[from] UnknownSortField),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Lookup miss on an arbitrary field
    pub fn not_found(resource: Resource, field: &'static str, value: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            field,
            value: value.to_string(),
        }
    }

    pub fn category_not_found(id: CategoryId) -> Self {
        Self::not_found(Resource::Category, "id", id)
    }

    pub fn post_not_found(id: PostId) -> Self {
        Self::not_found(Resource::Post, "id", id)
    }

    pub fn comment_not_found(id: CommentId) -> Self {
        Self::not_found(Resource::Comment, "id", id)
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { resource, .. } => match resource {
                Resource::Category => "UNKNOWN_CATEGORY",
                Resource::Post => "UNKNOWN_POST",
                Resource::Comment => "UNKNOWN_COMMENT",
            },
            Self::InvalidRelationship(_) => "INVALID_RELATIONSHIP",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidSortField(_) => "INVALID_SORT_FIELD",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidSortField(_))
    }

    /// Check if the caller sent a request that can never succeed as-is
    pub fn is_bad_request(&self) -> bool {
        self.is_validation() || matches!(self, Self::InvalidRelationship(_))
    }
}
