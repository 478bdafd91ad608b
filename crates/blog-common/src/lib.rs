//! # blog-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService, ADMIN_ROLE};
pub use config::{
    AppConfig, AppSettings, AuthPolicyConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, JwtConfig, RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    try_init_tracing_with_config, TracingConfig, TracingError,
};
