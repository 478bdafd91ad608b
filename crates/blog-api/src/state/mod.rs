//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration and token validation.

use std::sync::Arc;

use blog_common::{AppConfig, AuthPolicyConfig, JwtService};
use blog_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Validates bearer tokens
    jwt_service: Arc<JwtService>,
}

impl AppState {
    /// Create a new AppState, deriving the JWT service from the configuration
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            jwt_service: Arc::new(jwt_service),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Which category endpoints require the ADMIN role
    pub fn auth_policy(&self) -> AuthPolicyConfig {
        self.config.auth
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("jwt_service", &"JwtService")
            .finish()
    }
}
