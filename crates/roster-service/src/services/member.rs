//! Member administration service
//!
//! Create, full update and delete of roster entries. Input is validated
//! before the store is touched.

use futures::future::join_all;
use roster_common::DuplicateNamePolicy;
use roster_core::NewMember;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{DeleteResponse, MemberRequest, MemberResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member administration service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a member; the store assigns the id
    #[instrument(skip(self, request), fields(firstname = %request.firstname))]
    pub async fn create(&self, request: MemberRequest) -> ServiceResult<MemberResponse> {
        let member = Self::validated(request)?;
        self.check_duplicate_name(&member).await?;

        let created = self.ctx.member_repo().create(&member).await?;
        info!(member_id = created.id, "Member created");
        Ok(MemberResponse::from(created))
    }

    /// Replace every field of an existing member
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: MemberRequest) -> ServiceResult<MemberResponse> {
        let member = Self::validated(request)?;

        let updated = self.ctx.member_repo().update(id, &member).await?;
        info!(member_id = id, "Member updated");
        Ok(MemberResponse::from(updated))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<DeleteResponse> {
        self.ctx.member_repo().delete(id).await?;
        info!(member_id = id, "Member deleted");
        Ok(DeleteResponse::single())
    }

    /// Delete several members concurrently
    ///
    /// Each delete is independent. Any failure makes the whole call fail
    /// with only the number of failures reported.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn delete_many(&self, ids: &[i64]) -> ServiceResult<DeleteResponse> {
        if ids.is_empty() {
            return Err(ServiceError::validation("At least one id is required"));
        }

        let repo = self.ctx.member_repo();
        let results = join_all(ids.iter().map(|id| repo.delete(*id))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = ids.len(), "Bulk delete partially failed");
            return Err(ServiceError::BulkDelete {
                failed,
                total: ids.len(),
            });
        }

        info!(deleted = ids.len(), "Members deleted");
        Ok(DeleteResponse::bulk(ids.len()))
    }

    fn validated(request: MemberRequest) -> ServiceResult<NewMember> {
        request.validate()?;
        Ok(request.into_new_member())
    }

    async fn check_duplicate_name(&self, member: &NewMember) -> ServiceResult<()> {
        if self.ctx.duplicate_name_policy() == DuplicateNamePolicy::Allow {
            return Ok(());
        }

        let similar = self
            .ctx
            .member_repo()
            .find_by_name(&member.firstname, member.lastname.as_deref())
            .await?;
        if similar.is_empty() {
            return Ok(());
        }

        warn!(matches = similar.len(), "Rejected duplicate member name");
        Err(ServiceError::DuplicateName { similar })
    }
}
