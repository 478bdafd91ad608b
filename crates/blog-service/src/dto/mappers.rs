//! Entity <-> DTO mappers
//!
//! Two pure conversions per pair: `From<&Entity> for Dto` and `From<Dto> for Entity`.
//! A comment DTO carries no post reference, so it converts with the owning post supplied.

use blog_core::entities::{Category, Comment, Post};
use blog_core::value_objects::{CategoryId, CommentId, Page, PostId};

use super::resources::{CategoryDto, CommentDto, PostDto};
use super::responses::PostPage;

/// A post together with its loaded comments
#[derive(Debug, Clone)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id.into_inner()),
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            id: dto.id.map_or(CategoryId::UNSAVED, CategoryId::new),
            name: dto.name,
            description: dto.description,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            id: Some(comment.id.into_inner()),
            name: comment.name.clone(),
            email: comment.email.clone(),
            body: comment.body.clone(),
        }
    }
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl CommentDto {
    /// Convert into an entity attached to the given post
    pub fn into_comment(self, post_id: PostId) -> Comment {
        Comment {
            id: self.id.map_or(CommentId::UNSAVED, CommentId::new),
            name: self.name,
            email: self.email,
            body: self.body,
            post_id,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostDto {
    fn from(post: &Post) -> Self {
        Self {
            id: Some(post.id.into_inner()),
            title: post.title.clone(),
            description: post.description.clone(),
            content: post.content.clone(),
            category_id: post.category_id.into_inner(),
            comments: Vec::new(),
        }
    }
}

impl From<PostWithComments> for PostDto {
    fn from(loaded: PostWithComments) -> Self {
        Self {
            comments: loaded.comments.iter().map(CommentDto::from).collect(),
            ..Self::from(&loaded.post)
        }
    }
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Post {
            id: dto.id.map_or(PostId::UNSAVED, PostId::new),
            title: dto.title,
            description: dto.description,
            content: dto.content,
            category_id: CategoryId::new(dto.category_id),
        }
    }
}

impl From<Page<PostDto>> for PostPage {
    fn from(page: Page<PostDto>) -> Self {
        Self {
            page_no: page.page_no,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            last: page.is_last(),
            content: page.content,
        }
    }
}
