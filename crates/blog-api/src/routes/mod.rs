//! Route definitions
//!
//! Resource routes are mounted under /api; health and API docs sit beside them.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{categories, comments, health, posts};
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH};
use crate::state::AppState;

/// Create the resource router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Swagger UI plus the generated OpenAPI document
pub fn docs_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(category_routes())
        .merge(post_routes())
        .merge(comment_routes())
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::get_categories).post(categories::add_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::get_all_posts).post(posts::create_post))
        .route(
            "/posts/:post_id",
            get(posts::get_post_by_id)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/category/:id", get(posts::get_posts_by_category))
}

/// Comment routes, nested under their post
///
/// Post segments are named `post_id` everywhere so the router sees one parameter.
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/:post_id/comments",
            get(comments::get_comments_by_post_id).post(comments::create_comment),
        )
        .route(
            "/posts/:post_id/comments/:id",
            get(comments::get_comment_by_id)
                .put(comments::update_comment)
                .delete(comments::delete_comment),
        )
}
