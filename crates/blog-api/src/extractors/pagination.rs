//! Post paging extractor
//!
//! Reads `pageNo`, `pageSize`, `sortBy` and `sortDir` from the query string.
//! Missing parameters take their defaults; the page size is clamped later by
//! the paging request itself.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_service::dto::PostPageQuery;

use crate::response::ApiError;

/// Paging parameters of the post listing
#[derive(Debug, Clone, Default)]
pub struct PostPaging(pub PostPageQuery);

#[async_trait]
impl<S> FromRequestParts<S> for PostPaging
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PostPageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(PostPaging(query))
    }
}
