//! Post service
//!
//! Handles post creation, paging, category listings, and cascading deletion.
//! Posts are returned with their comments attached.

use std::collections::HashMap;

use blog_core::entities::{Comment, Post};
use blog_core::{CategoryId, PageRequest, PostId, PostSortField, Resource, Sort, SortDirection};
use tracing::{info, instrument};

use crate::dto::{PostDto, PostPage, PostWithComments};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post under an existing category
    #[instrument(skip(self, request), fields(category_id = request.category_id))]
    pub async fn create_post(&self, request: PostDto) -> ServiceResult<PostDto> {
        let category_id = CategoryId::new(request.category_id);
        self.require_category(category_id).await?;

        let post = Post::new(
            request.title,
            request.description,
            request.content,
            category_id,
        );
        let created = self.ctx.post_repo().create(&post).await?;

        info!(post_id = %created.id, category_id = %category_id, "Post created");

        Ok(PostDto::from(&created))
    }

    /// Get one sorted page of posts
    ///
    /// `sort_dir` sorts ascending only when it equals "asc" ignoring case.
    #[instrument(skip(self))]
    pub async fn get_all_posts(
        &self,
        page_no: u32,
        page_size: u32,
        sort_by: &str,
        sort_dir: &str,
    ) -> ServiceResult<PostPage> {
        let field: PostSortField = sort_by.parse().map_err(blog_core::DomainError::from)?;
        let sort = Sort::new(field, SortDirection::from_param(sort_dir));
        let request = PageRequest::new(page_no, page_size, sort);

        let page = self.ctx.post_repo().find_page(request).await?;
        let mut comments = self.comments_by_post(&page.content).await?;

        let page = page.map(|post| {
            let comments = comments.remove(&post.id).unwrap_or_default();
            PostDto::from(PostWithComments { post, comments })
        });

        Ok(PostPage::from(page))
    }

    /// Get post by ID with its comments
    #[instrument(skip(self))]
    pub async fn get_post_by_id(&self, post_id: PostId) -> ServiceResult<PostDto> {
        let post = self.get_post_entity(post_id).await?;
        self.with_comments(post).await
    }

    /// Overwrite a post, possibly moving it to another category
    #[instrument(skip(self, request), fields(category_id = request.category_id))]
    pub async fn update_post(&self, request: PostDto, post_id: PostId) -> ServiceResult<PostDto> {
        let mut post = self.get_post_entity(post_id).await?;

        let category_id = CategoryId::new(request.category_id);
        self.require_category(category_id).await?;

        post.overwrite(request.title, request.description, request.content);
        post.reassign(category_id);

        let updated = self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post_id, category_id = %category_id, "Post updated");

        self.with_comments(updated).await
    }

    /// Delete a post with its comments
    #[instrument(skip(self))]
    pub async fn delete_post_by_id(&self, post_id: PostId) -> ServiceResult<()> {
        if !self.ctx.post_repo().exists(post_id).await? {
            return Err(ServiceError::not_found(Resource::Post, post_id));
        }

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");

        Ok(())
    }

    /// List the posts of a category
    #[instrument(skip(self))]
    pub async fn get_posts_by_category(&self, category_id: CategoryId) -> ServiceResult<Vec<PostDto>> {
        self.require_category(category_id).await?;

        let posts = self.ctx.post_repo().find_by_category(category_id).await?;
        let mut comments = self.comments_by_post(&posts).await?;

        Ok(posts
            .into_iter()
            .map(|post| {
                let comments = comments.remove(&post.id).unwrap_or_default();
                PostDto::from(PostWithComments { post, comments })
            })
            .collect())
    }

    /// Get post entity by ID
    #[instrument(skip(self))]
    pub async fn get_post_entity(&self, post_id: PostId) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Resource::Post, post_id))
    }

    async fn require_category(&self, category_id: CategoryId) -> ServiceResult<()> {
        if self.ctx.category_repo().exists(category_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found(Resource::Category, category_id))
        }
    }

    async fn with_comments(&self, post: Post) -> ServiceResult<PostDto> {
        let comments = self.ctx.comment_repo().find_by_post(post.id).await?;
        Ok(PostDto::from(PostWithComments { post, comments }))
    }

    /// Load the comments of many posts in one query, grouped by post
    async fn comments_by_post(&self, posts: &[Post]) -> ServiceResult<HashMap<PostId, Vec<Comment>>> {
        let ids: Vec<PostId> = posts.iter().map(|post| post.id).collect();
        let comments = self.ctx.comment_repo().find_by_posts(&ids).await?;

        let mut grouped: HashMap<PostId, Vec<Comment>> = HashMap::new();
        for comment in comments {
            grouped.entry(comment.post_id).or_default().push(comment);
        }
        Ok(grouped)
    }
}
