//! Post handlers
//!
//! Endpoints for post management and the paged post listing.

use axum::{extract::State, Json};
use blog_core::{CategoryId, PostId};
use blog_service::{
    dto::{PostDto, PostPage, PostPageQuery},
    PostService,
};

use crate::extractors::{IdPath, PostPaging, ValidatedJson};
use crate::response::{ApiResult, Created, ErrorBody, Message};
use crate::state::AppState;

pub const POST_DELETED: &str = "Post entity deleted successfully.";

/// Create a post in an existing category
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = PostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PostDto>,
) -> ApiResult<Created<Json<PostDto>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(request).await?;
    Ok(Created(Json(response)))
}

/// Get one sorted page of posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(PostPageQuery),
    responses(
        (status = 200, description = "One page of posts", body = PostPage),
        (status = 400, description = "Unknown sort field or bad paging parameter", body = ErrorBody)
    )
)]
pub async fn get_all_posts(
    State(state): State<AppState>,
    PostPaging(query): PostPaging,
) -> ApiResult<Json<PostPage>> {
    let service = PostService::new(state.service_context());
    let response = service
        .get_all_posts(query.page_no, query.page_size, &query.sort_by, &query.sort_dir)
        .await?;
    Ok(Json(response))
}

/// Get a post with its comments
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorBody)
    )
)]
pub async fn get_post_by_id(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<PostDto>> {
    let service = PostService::new(state.service_context());
    let response = service.get_post_by_id(post_id).await?;
    Ok(Json(response))
}

/// Overwrite a post, possibly moving it to another category
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    request_body = PostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Post or category not found", body = ErrorBody)
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<PostId>,
    ValidatedJson(request): ValidatedJson<PostDto>,
) -> ApiResult<Json<PostDto>> {
    let service = PostService::new(state.service_context());
    let response = service.update_post(request, post_id).await?;
    Ok(Json(response))
}

/// Delete a post and its comments
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Post not found", body = ErrorBody)
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Message> {
    let service = PostService::new(state.service_context());
    service.delete_post_by_id(post_id).await?;
    Ok(Message(POST_DELETED))
}

/// List the posts of a category
#[utoipa::path(
    get,
    path = "/api/posts/category/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Posts of the category", body = [PostDto]),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn get_posts_by_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath<CategoryId>,
) -> ApiResult<Json<Vec<PostDto>>> {
    let service = PostService::new(state.service_context());
    let response = service.get_posts_by_category(category_id).await?;
    Ok(Json(response))
}
