//! HTTP tests against PostgreSQL
//!
//! These tests require a running PostgreSQL instance and `DATABASE_URL`;
//! they return early when it is not set.
//!
//! Run with: cargo test -p integration-tests --test postgres_api_tests

use blog_service::dto::{CategoryDto, CommentDto, PostDto};
use integration_tests::{
    assert_json, assert_status, assert_text, post_request, start_postgres_server,
    unique_category, unique_comment, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

async fn server() -> Option<TestServer> {
    start_postgres_server()
        .await
        .expect("Failed to start server")
}

#[tokio::test]
async fn test_readiness_with_database() {
    let Some(server) = server().await else {
        return;
    };

    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_full_flow_with_cascade() {
    let Some(server) = server().await else {
        return;
    };
    let admin = server.admin_token().unwrap();

    let response = server.post("/api/categories", &unique_category()).await.unwrap();
    let category: CategoryDto = assert_json(response, StatusCode::CREATED).await.unwrap();
    let category_id = category.id.unwrap();

    let response = server
        .post("/api/posts", &post_request("Persisted", category_id))
        .await
        .unwrap();
    let post: PostDto = assert_json(response, StatusCode::CREATED).await.unwrap();
    let post_id = post.id.unwrap();

    let response = server
        .post(&format!("/api/posts/{post_id}/comments"), &unique_comment())
        .await
        .unwrap();
    let comment: CommentDto = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&format!("/api/posts/{post_id}")).await.unwrap();
    let loaded: PostDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(loaded.comments, vec![comment]);

    let response = server
        .delete_auth(&format!("/api/categories/{category_id}"), &admin)
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Category deleted successfully!");

    let response = server.get(&format!("/api/posts/{post_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/posts/{post_id}/comments"))
        .await
        .unwrap();
    let listed: Vec<CommentDto> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_listing_sorted_by_category_id() {
    let Some(server) = server().await else {
        return;
    };

    let response = server
        .get("/api/posts?pageSize=50&sortBy=categoryId&sortDir=desc")
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["categoryId"].as_i64().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] >= w[1]));
}
