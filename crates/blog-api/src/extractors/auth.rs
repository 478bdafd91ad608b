//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blog_common::{AppError, Claims};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

impl AuthUser {
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    /// Subject of the token
    pub fn subject(&self) -> &str {
        &self.claims.sub
    }

    /// Fail with 403 unless the caller holds the ADMIN role
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.claims.is_admin() {
            Ok(())
        } else {
            tracing::warn!(subject = %self.subject(), "Caller lacks the ADMIN role");
            Err(ApiError::App(AppError::InsufficientPermissions))
        }
    }
}

fn authenticate(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = state.jwt_service().decode_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Rejected access token");
        ApiError::App(e)
    })?;

    Ok(AuthUser::new(claims))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        authenticate(&AppState::from_ref(state), bearer.token())
    }
}

/// Optional authenticated caller
///
/// None when no Authorization header is present; an invalid token is still
/// rejected.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// Enforce the ADMIN role only when the policy asks for it
    pub fn require_admin_if(&self, required: bool) -> Result<(), ApiError> {
        if !required {
            return Ok(());
        }

        match &self.0 {
            Some(user) => user.require_admin(),
            None => Err(ApiError::MissingAuth),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let user = authenticate(&AppState::from_ref(state), bearer.token())?;
                Ok(OptionalAuthUser(Some(user)))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}
