//! Admin authentication handlers

use axum::{extract::State, Json};
use roster_service::dto::{LoginRequest, LoginResponse, ValidateResponse};
use roster_service::AdminAuthService;

use crate::extractors::{BearerToken, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Exchange the admin password for a token
///
/// POST /api/auth
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AdminAuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Check the bearer token
///
/// GET /api/auth
pub async fn validate(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<ValidateResponse>> {
    let service = AdminAuthService::new(state.service_context());
    let response = service.validate(&token)?;
    Ok(Json(response))
}
