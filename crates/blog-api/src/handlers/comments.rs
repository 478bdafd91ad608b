//! Comment handlers
//!
//! Endpoints for comments nested under a post.

use axum::{extract::State, Json};
use blog_core::{CommentId, PostId};
use blog_service::{dto::CommentDto, CommentService};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, ErrorBody, Message};
use crate::state::AppState;

pub const COMMENT_DELETED: &str = "Comment deleted successfully";

/// Attach a comment to a post
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Post id")),
    request_body = CommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Post not found", body = ErrorBody)
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<PostId>,
    ValidatedJson(request): ValidatedJson<CommentDto>,
) -> ApiResult<Created<Json<CommentDto>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create_comment(post_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the comments of a post
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Post id")),
    responses((status = 200, description = "Comments of the post", body = [CommentDto]))
)]
pub async fn get_comments_by_post_id(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<PostId>,
) -> ApiResult<Json<Vec<CommentDto>>> {
    let service = CommentService::new(state.service_context());
    let response = service.get_comments_by_post_id(post_id).await?;
    Ok(Json(response))
}

/// Get one comment of a post
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments/{id}",
    tag = "comments",
    params(
        ("post_id" = i64, Path, description = "Post id"),
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment found", body = CommentDto),
        (status = 400, description = "Comment belongs to another post", body = ErrorBody),
        (status = 404, description = "Post or comment not found", body = ErrorBody)
    )
)]
pub async fn get_comment_by_id(
    State(state): State<AppState>,
    IdPath((post_id, comment_id)): IdPath<(PostId, CommentId)>,
) -> ApiResult<Json<CommentDto>> {
    let service = CommentService::new(state.service_context());
    let response = service.get_comment_by_id(post_id, comment_id).await?;
    Ok(Json(response))
}

/// Overwrite a comment of a post
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}/comments/{id}",
    tag = "comments",
    params(
        ("post_id" = i64, Path, description = "Post id"),
        ("id" = i64, Path, description = "Comment id")
    ),
    request_body = CommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid payload or comment belongs to another post", body = ErrorBody),
        (status = 404, description = "Post or comment not found", body = ErrorBody)
    )
)]
pub async fn update_comment(
    State(state): State<AppState>,
    IdPath((post_id, comment_id)): IdPath<(PostId, CommentId)>,
    ValidatedJson(request): ValidatedJson<CommentDto>,
) -> ApiResult<Json<CommentDto>> {
    let service = CommentService::new(state.service_context());
    let response = service.update_comment(post_id, comment_id, request).await?;
    Ok(Json(response))
}

/// Delete a comment of a post
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/comments/{id}",
    tag = "comments",
    params(
        ("post_id" = i64, Path, description = "Post id"),
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Comment belongs to another post", body = ErrorBody),
        (status = 404, description = "Post or comment not found", body = ErrorBody)
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    IdPath((post_id, comment_id)): IdPath<(PostId, CommentId)>,
) -> ApiResult<Message> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(post_id, comment_id).await?;
    Ok(Message(COMMENT_DELETED))
}
