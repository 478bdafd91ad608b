//! Comment service
//!
//! Comments are always addressed through their post. Every lookup by comment id
//! also checks that the comment belongs to the post in the request.

use blog_core::entities::Comment;
use blog_core::{
    CommentId, PostId, Resource, COMMENT_NOT_IN_POST_ON_READ, COMMENT_NOT_IN_POST_ON_WRITE,
};
use tracing::{info, instrument};

use crate::dto::CommentDto;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attach a new comment to a post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: PostId,
        request: CommentDto,
    ) -> ServiceResult<CommentDto> {
        self.require_post(post_id).await?;

        let comment = Comment::new(request.name, request.email, request.body, post_id);
        let created = self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %created.id, post_id = %post_id, "Comment created");

        Ok(CommentDto::from(&created))
    }

    /// List the comments of a post; an unknown post has no comments
    #[instrument(skip(self))]
    pub async fn get_comments_by_post_id(&self, post_id: PostId) -> ServiceResult<Vec<CommentDto>> {
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        Ok(comments.iter().map(CommentDto::from).collect())
    }

    /// Get one comment of a post
    #[instrument(skip(self))]
    pub async fn get_comment_by_id(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> ServiceResult<CommentDto> {
        let comment = self
            .find_owned(post_id, comment_id, COMMENT_NOT_IN_POST_ON_READ)
            .await?;

        Ok(CommentDto::from(&comment))
    }

    /// Overwrite a comment of a post
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        request: CommentDto,
    ) -> ServiceResult<CommentDto> {
        let mut comment = self
            .find_owned(post_id, comment_id, COMMENT_NOT_IN_POST_ON_WRITE)
            .await?;

        comment.overwrite(request.name, request.email, request.body);
        let updated = self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, post_id = %post_id, "Comment updated");

        Ok(CommentDto::from(&updated))
    }

    /// Delete a comment of a post
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, post_id: PostId, comment_id: CommentId) -> ServiceResult<()> {
        self.find_owned(post_id, comment_id, COMMENT_NOT_IN_POST_ON_WRITE)
            .await?;

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, post_id = %post_id, "Comment deleted");

        Ok(())
    }

    async fn require_post(&self, post_id: PostId) -> ServiceResult<()> {
        if self.ctx.post_repo().exists(post_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found(Resource::Post, post_id))
        }
    }

    /// Resolve post then comment, failing with `mismatch` when the comment lives elsewhere
    async fn find_owned(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        mismatch: &str,
    ) -> ServiceResult<Comment> {
        self.require_post(post_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Comment, comment_id))?;

        if !comment.belongs_to(post_id) {
            return Err(ServiceError::invalid_relationship(mismatch));
        }

        Ok(comment)
    }
}
