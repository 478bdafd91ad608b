//! HTTP tests against a real server backed by the in-memory repositories
//!
//! Run with: cargo test -p integration-tests --test api_tests

use blog_service::dto::{CategoryDto, CommentDto, PostDto};
use integration_tests::{
    assert_error, assert_json, assert_status, assert_text, category_request, comment_request,
    post_request, test_config_with, unique_category, unique_comment, unique_post, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn server() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

async fn create_category(server: &TestServer) -> CategoryDto {
    let response = server.post("/api/categories", &unique_category()).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_post(server: &TestServer, category_id: i64) -> PostDto {
    let response = server
        .post("/api/posts", &unique_post(category_id))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_comment(server: &TestServer, post_id: i64) -> CommentDto {
    let response = server
        .post(&format!("/api/posts/{post_id}/comments"), &unique_comment())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;

    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_without_database() {
    let server = server().await;

    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["database"], "unhealthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = server().await;

    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = server().await;

    let response = server.get("/api-docs/openapi.json").await.unwrap();
    let doc: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(doc["info"]["title"], "Blog App REST API");
    assert!(doc["paths"]["/api/posts"].is_object());
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_category_crud() {
    let server = server().await;
    let admin = server.admin_token().unwrap();

    let response = server
        .post("/api/categories", &category_request("Tech", "Tech posts"))
        .await
        .unwrap();
    let created: CategoryDto = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created.id.unwrap();
    assert_eq!(created.name, "Tech");

    let response = server.get(&format!("/api/categories/{id}")).await.unwrap();
    let fetched: CategoryDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);

    let response = server
        .put(
            &format!("/api/categories/{id}"),
            &category_request("Science", "Lab notes"),
        )
        .await
        .unwrap();
    let updated: CategoryDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Science");

    let response = server.get("/api/categories").await.unwrap();
    let all: Vec<CategoryDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all, vec![updated]);

    let response = server
        .delete_auth(&format!("/api/categories/{id}"), &admin)
        .await
        .unwrap();
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Category deleted successfully!");

    let response = server.get(&format!("/api/categories/{id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_category_not_found_body() {
    let server = server().await;

    let response = server.get("/api/categories/404").await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_CATEGORY");
    assert_eq!(
        body["error"]["message"],
        "Category not found with id : '404'"
    );
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_category_delete_requires_admin() {
    let server = server().await;
    let category = create_category(&server).await;
    let path = format!("/api/categories/{}", category.id.unwrap());

    let response = server.delete(&path).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");

    let response = server.delete_auth(&path, "not-a-jwt").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");

    let user = server.user_token().unwrap();
    let response = server.delete_auth(&path, &user).await.unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "INSUFFICIENT_PERMISSIONS");

    // Still there
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_category_writes_policy() {
    let config = test_config_with(&[("AUTH_CATEGORY_WRITES_REQUIRE_ADMIN", "true")]).unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server.post("/api/categories", &unique_category()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let user = server.user_token().unwrap();
    let response = server
        .post_auth("/api/categories", &user, &unique_category())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let admin = server.admin_token().unwrap();
    let response = server
        .post_auth("/api/categories", &admin, &unique_category())
        .await
        .unwrap();
    let created: CategoryDto = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/categories/{}", created.id.unwrap()),
            &admin,
            &unique_category(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_category_delete_policy_can_be_disabled() {
    let config =
        test_config_with(&[("AUTH_CATEGORY_DELETE_REQUIRES_ADMIN", "false")]).unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();
    let category = create_category(&server).await;

    let response = server
        .delete(&format!("/api/categories/{}", category.id.unwrap()))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_category_validation() {
    let server = server().await;

    let response = server
        .post("/api/categories", &json!({"name": "", "description": "x"}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["name"].is_array());
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let server = server().await;

    let response = server
        .client
        .post(format!("{}/api/categories", server.base_url()))
        .header("content-type", "application/json")
        .body("{\"name\":")
        .send()
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_non_numeric_id_rejected() {
    let server = server().await;

    let response = server.get("/api/categories/abc").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_crud() {
    let server = server().await;
    let category = create_category(&server).await;
    let category_id = category.id.unwrap();

    let request = post_request("Hello", category_id);
    let response = server.post("/api/posts", &request).await.unwrap();
    let created: PostDto = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created.id.unwrap();
    assert_eq!(created.title, "Hello");
    assert_eq!(created.category_id, category_id);
    assert!(created.comments.is_empty());

    let response = server
        .put(&format!("/api/posts/{id}"), &post_request("Edited", category_id))
        .await
        .unwrap();
    let updated: PostDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Edited");

    let response = server
        .get(&format!("/api/posts/category/{category_id}"))
        .await
        .unwrap();
    let listed: Vec<PostDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed, vec![updated]);

    let response = server.delete(&format!("/api/posts/{id}")).await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Post entity deleted successfully.");

    let response = server.get(&format!("/api/posts/{id}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["message"], format!("Post not found with id : '{id}'"));
}

#[tokio::test]
async fn test_post_requires_existing_category() {
    let server = server().await;

    let response = server.post("/api/posts", &post_request("x", 999)).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_CATEGORY");
}

#[tokio::test]
async fn test_post_requires_category_id() {
    let server = server().await;

    let response = server
        .post("/api/posts", &json!({"title": "No category"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_post_listing_paging_and_sorting() {
    let server = server().await;
    let category_id = create_category(&server).await.id.unwrap();
    for title in ["b", "d", "a", "c"] {
        let response = server
            .post("/api/posts", &post_request(title, category_id))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/posts").await.unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["pageNo"], 0);
    assert_eq!(page["pageSize"], 10);
    assert_eq!(page["totalElements"], 4);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["last"], true);

    let response = server
        .get("/api/posts?pageNo=0&pageSize=3&sortBy=title&sortDir=DESC")
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let titles: Vec<&str> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["d", "c", "b"]);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["last"], false);
}

#[tokio::test]
async fn test_post_listing_bad_parameters() {
    let server = server().await;

    let response = server.get("/api/posts?sortBy=password").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_SORT_FIELD");

    let response = server.get("/api/posts?pageNo=-1").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");

    let response = server.get("/api/posts?pageSize=1000").await.unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["pageSize"], 100);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_crud() {
    let server = server().await;
    let category_id = create_category(&server).await.id.unwrap();
    let post_id = create_post(&server, category_id).await.id.unwrap();
    let base = format!("/api/posts/{post_id}/comments");

    let response = server
        .post(&base, &comment_request("Ann", "First"))
        .await
        .unwrap();
    let created: CommentDto = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created.id.unwrap();

    let response = server.get(&format!("{base}/{id}")).await.unwrap();
    let fetched: CommentDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);

    let response = server
        .put(&format!("{base}/{id}"), &comment_request("Ann", "Edited"))
        .await
        .unwrap();
    let updated: CommentDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.body, "Edited");

    let response = server.get(&format!("/api/posts/{post_id}")).await.unwrap();
    let post: PostDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.comments, vec![updated.clone()]);

    let response = server.get(&base).await.unwrap();
    let listed: Vec<CommentDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed, vec![updated]);

    let response = server.delete(&format!("{base}/{id}")).await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Comment deleted successfully");

    let response = server.get(&format!("{base}/{id}")).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_COMMENT");
}

#[tokio::test]
async fn test_comment_validation() {
    let server = server().await;
    let category_id = create_category(&server).await.id.unwrap();
    let post_id = create_post(&server, category_id).await.id.unwrap();

    let response = server
        .post(
            &format!("/api/posts/{post_id}/comments"),
            &json!({"name": "Ann", "email": "not-an-email", "body": "Hi"}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body["error"]["details"]["email"].is_array());

    let label = "d".repeat(63);
    let long_email = format!("{}@{label}.{label}.{label}.com", "u".repeat(64));
    let response = server
        .post(
            &format!("/api/posts/{post_id}/comments"),
            &json!({"name": "Ann", "email": long_email, "body": "Hi"}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["email"].is_array());
}

#[tokio::test]
async fn test_comment_on_other_post() {
    let server = server().await;
    let category_id = create_category(&server).await.id.unwrap();
    let owner = create_post(&server, category_id).await.id.unwrap();
    let other = create_post(&server, category_id).await.id.unwrap();
    let comment = create_comment(&server, owner).await.id.unwrap();
    let path = format!("/api/posts/{other}/comments/{comment}");

    let response = server.get(&path).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_RELATIONSHIP");
    assert_eq!(body["error"]["message"], "Comment does not not belong to post");

    let response = server.delete(&path).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["message"], "Comment does not belongs to post");
}

#[tokio::test]
async fn test_comments_of_unknown_post() {
    let server = server().await;

    let response = server.get("/api/posts/777/comments").await.unwrap();
    let listed: Vec<CommentDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());

    let response = server
        .post("/api/posts/777/comments", &unique_comment())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_POST");
}

// ============================================================================
// Cascade Scenario
// ============================================================================

#[tokio::test]
async fn test_category_delete_cascades_over_http() {
    let server = server().await;
    let admin = server.admin_token().unwrap();
    let category_id = create_category(&server).await.id.unwrap();
    let post_id = create_post(&server, category_id).await.id.unwrap();
    create_comment(&server, post_id).await;

    let response = server
        .delete_auth(&format!("/api/categories/{category_id}"), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/posts/{post_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/posts/{post_id}/comments"))
        .await
        .unwrap();
    let listed: Vec<CommentDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());
}
