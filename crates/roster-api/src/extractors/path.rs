//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Numeric member id from `/members/:id`
#[derive(Debug, Clone, Copy)]
pub struct MemberIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for MemberIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("Member id must be an integer"))?;

        Ok(MemberIdPath(id))
    }
}
