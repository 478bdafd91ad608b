//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Category, Comment, Post};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, CommentId, Page, PageRequest, PostId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;

    /// List every category ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Category>>;

    /// Check whether a category exists
    async fn exists(&self, id: CategoryId) -> RepoResult<bool>;

    /// Insert a new category, returning it with its generated id
    async fn create(&self, category: &Category) -> RepoResult<Category>;

    /// Overwrite an existing category
    async fn update(&self, category: &Category) -> RepoResult<Category>;

    /// Delete a category together with its posts and their comments
    async fn delete(&self, id: CategoryId) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Fetch one sorted page of posts
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Post>>;

    /// List the posts of a category ordered by id
    async fn find_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Post>>;

    /// Check whether a post exists
    async fn exists(&self, id: PostId) -> RepoResult<bool>;

    /// Insert a new post, returning it with its generated id
    async fn create(&self, post: &Post) -> RepoResult<Post>;

    /// Overwrite an existing post, including its category
    async fn update(&self, post: &Post) -> RepoResult<Post>;

    /// Delete a post together with its comments
    async fn delete(&self, id: PostId) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// List the comments of a post ordered by id
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Comment>>;

    /// List the comments of several posts at once, ordered by post then id
    async fn find_by_posts(&self, post_ids: &[PostId]) -> RepoResult<Vec<Comment>>;

    /// Insert a new comment, returning it with its generated id
    async fn create(&self, comment: &Comment) -> RepoResult<Comment>;

    /// Overwrite an existing comment
    async fn update(&self, comment: &Comment) -> RepoResult<Comment>;

    /// Delete a comment
    async fn delete(&self, id: CommentId) -> RepoResult<()>;
}
