//! OpenAPI document for the blog API

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers::{categories, comments, health, posts};
use crate::response::{ErrorBody, ErrorDetail};
use blog_service::dto::{
    CategoryDto, CommentDto, HealthChecks, HealthResponse, PostDto, PostPage, ReadinessResponse,
};

/// Path the generated document is served from
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog App REST API",
        version = "1.0.0",
        description = "Categories, posts and their comments.",
        license(name = "MIT")
    ),
    paths(
        categories::add_category,
        categories::get_category,
        categories::get_categories,
        categories::update_category,
        categories::delete_category,
        posts::create_post,
        posts::get_all_posts,
        posts::get_post_by_id,
        posts::update_post,
        posts::delete_post,
        posts::get_posts_by_category,
        comments::create_comment,
        comments::get_comments_by_post_id,
        comments::get_comment_by_id,
        comments::update_comment,
        comments::delete_comment,
        health::health_check,
        health::readiness_check,
    ),
    components(schemas(
        CategoryDto,
        PostDto,
        CommentDto,
        PostPage,
        HealthResponse,
        ReadinessResponse,
        HealthChecks,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "categories", description = "Category management"),
        (name = "posts", description = "Posts and the paged post listing"),
        (name = "comments", description = "Comments nested under a post"),
        (name = "health", description = "Service health checks"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("HS256 token whose roles claim may carry ADMIN"))
                        .build(),
                ),
            );
        }
    }
}
