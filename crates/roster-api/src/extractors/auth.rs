//! Authentication extractors
//!
//! Read the admin token from `Authorization: Bearer <token>`.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use roster_common::{AdminClaims, AppError};
use roster_service::AdminAuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw bearer token, not yet checked
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        Ok(BearerToken(bearer.token().to_string()))
    }
}

/// Request made with a valid admin token
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub claims: AdminClaims,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        let claims = AdminAuthService::new(app_state.service_context())
            .authenticate(&token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected admin token");
                ApiError::Service(e)
            })?;

        Ok(AdminAuth { claims })
    }
}
