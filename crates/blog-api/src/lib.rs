//! # blog-api
//!
//! REST API server built with Axum framework.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use response::{ApiError, ApiResult};
pub use server::{app_state_with_pool, create_app, create_app_state, run, run_server};
pub use state::AppState;
