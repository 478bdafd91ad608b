//! Category handlers
//!
//! Endpoints for category management. Writes are guarded by the configured
//! authorization policy.

use axum::{extract::State, Json};
use blog_core::CategoryId;
use blog_service::{dto::CategoryDto, CategoryService};

use crate::extractors::{IdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, ErrorBody, Message};
use crate::state::AppState;

pub const CATEGORY_DELETED: &str = "Category deleted successfully!";

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CategoryDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "ADMIN role required", body = ErrorBody)
    )
)]
pub async fn add_category(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<CategoryDto>,
) -> ApiResult<Created<Json<CategoryDto>>> {
    auth.require_admin_if(state.auth_policy().category_writes_require_admin)?;

    let service = CategoryService::new(state.service_context());
    let response = service.add_category(request).await?;
    Ok(Created(Json(response)))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath<CategoryId>,
) -> ApiResult<Json<CategoryDto>> {
    let service = CategoryService::new(state.service_context());
    let response = service.get_category(category_id).await?;
    Ok(Json(response))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses((status = 200, description = "All categories", body = [CategoryDto]))
)]
pub async fn get_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryDto>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.get_all_categories().await?;
    Ok(Json(response))
}

/// Overwrite a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    request_body = CategoryDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    IdPath(category_id): IdPath<CategoryId>,
    ValidatedJson(request): ValidatedJson<CategoryDto>,
) -> ApiResult<Json<CategoryDto>> {
    auth.require_admin_if(state.auth_policy().category_writes_require_admin)?;

    let service = CategoryService::new(state.service_context());
    let response = service.update_category(request, category_id).await?;
    Ok(Json(response))
}

/// Delete a category with all of its posts and their comments
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category deleted", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "ADMIN role required", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    IdPath(category_id): IdPath<CategoryId>,
) -> ApiResult<Message> {
    auth.require_admin_if(state.auth_policy().category_delete_requires_admin)?;

    let service = CategoryService::new(state.service_context());
    service.delete_category(category_id).await?;
    Ok(Message(CATEGORY_DELETED))
}
