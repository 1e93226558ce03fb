//! Member handlers
//!
//! The listing is public; every mutation needs an admin token.

use axum::{
    extract::{Query, State},
    Json,
};
use roster_service::dto::{
    BulkDeleteRequest, DeleteResponse, ListMembersParams, ListResponse, MemberRequest,
    MemberResponse,
};
use roster_service::{ListingService, MemberService};

use crate::extractors::{AdminAuth, MemberIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Public gallery or admin roster
///
/// GET /api/members?page=&search=&admin=&lastNameFilter=
pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<ListMembersParams>,
) -> ApiResult<Json<ListResponse>> {
    let service = ListingService::new(state.service_context());
    let response = service
        .list(params.mode(), &params.filters(), params.page())
        .await?;
    Ok(Json(response))
}

/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<MemberRequest>,
) -> ApiResult<Created<Json<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let member = service.create(request).await?;
    Ok(Created(Json(member)))
}

/// PUT /api/members/:id
pub async fn update_member(
    State(state): State<AppState>,
    _admin: AdminAuth,
    MemberIdPath(id): MemberIdPath,
    ValidatedJson(request): ValidatedJson<MemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.update(id, request).await?;
    Ok(Json(member))
}

/// DELETE /api/members/:id
pub async fn delete_member(
    State(state): State<AppState>,
    _admin: AdminAuth,
    MemberIdPath(id): MemberIdPath,
) -> ApiResult<Json<DeleteResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.delete(id).await?;
    Ok(Json(response))
}

/// Bulk delete
///
/// DELETE /api/members
pub async fn delete_members(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<BulkDeleteRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.delete_many(&request.ids).await?;
    Ok(Json(response))
}
