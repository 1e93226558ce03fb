//! Member listing service
//!
//! Builds the public gallery view (priority sort, tiers, pages, grouping
//! by initial) and the unpaginated admin roster.

use std::collections::BTreeMap;

use roster_core::{sort_for_display, Member, MemberQuery, MemberRole};
use tracing::{debug, instrument};

use crate::dto::{member_responses, GroupedMembers, ListResponse, MemberResponse, MembersPayload};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Members per public page
pub const PUBLIC_PAGE_SIZE: usize = 60;

/// Longest search term honoured, in characters
pub const MAX_SEARCH_CHARS: usize = 100;

/// Who the listing is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Public,
    Admin,
}

/// Listing filters, already normalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub search: Option<String>,
    pub last_name: Option<String>,
}

impl ListFilters {
    /// Trim and cap the search term; blank values count as absent
    pub fn new(search: Option<&str>, last_name: Option<&str>) -> Self {
        let search = search
            .map(|s| s.trim().chars().take(MAX_SEARCH_CHARS).collect::<String>())
            .filter(|s| !s.is_empty());
        let last_name = last_name.filter(|s| !s.is_empty()).map(String::from);
        Self { search, last_name }
    }

    pub fn is_search(&self) -> bool {
        self.search.is_some()
    }

    /// Store query for the main public list
    fn public_query(&self) -> MemberQuery {
        let mut query = match &self.search {
            Some(term) => MemberQuery::all().with_search(term.clone()),
            None => MemberQuery::role(MemberRole::Member),
        };
        if let Some(last_name) = &self.last_name {
            query = query.with_lastname(last_name.clone());
        }
        query
    }
}

/// Listing service
pub struct ListingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ListingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List members for the given audience
    ///
    /// `page` is 1-based and only affects public listings.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        mode: ListMode,
        filters: &ListFilters,
        page: usize,
    ) -> ServiceResult<ListResponse> {
        let page = page.max(1);
        match mode {
            ListMode::Admin => self.list_admin(page).await,
            ListMode::Public => self.list_public(filters, page).await,
        }
    }

    async fn list_admin(&self, page: usize) -> ServiceResult<ListResponse> {
        let all = self.ctx.member_repo().find(&MemberQuery::all()).await?;

        let founders = tier(&all, MemberRole::Founder);
        let leaders = tier(&all, MemberRole::Leader);
        let total = all.len();
        debug!(total, "Admin listing");

        Ok(ListResponse {
            members: MembersPayload::Flat(member_responses(all)),
            founders,
            leaders,
            total,
            page,
            total_pages: 1,
        })
    }

    async fn list_public(&self, filters: &ListFilters, page: usize) -> ServiceResult<ListResponse> {
        let repo = self.ctx.member_repo();
        let query = filters.public_query();

        let (mut members, founders, leaders) = if filters.is_search() {
            (repo.find(&query).await?, Vec::new(), Vec::new())
        } else {
            let founders_query = MemberQuery::role(MemberRole::Founder);
            let leaders_query = MemberQuery::role(MemberRole::Leader);
            tokio::try_join!(
                repo.find(&query),
                repo.find(&founders_query),
                repo.find(&leaders_query),
            )?
        };

        sort_for_display(&mut members);
        let total = members.len();
        let page_members: Vec<Member> = members
            .into_iter()
            .skip((page - 1).saturating_mul(PUBLIC_PAGE_SIZE))
            .take(PUBLIC_PAGE_SIZE)
            .collect();
        debug!(total, page, on_page = page_members.len(), "Public listing");

        Ok(ListResponse {
            members: MembersPayload::Grouped(group_by_initial(page_members, total)),
            founders: member_responses(founders),
            leaders: member_responses(leaders),
            total,
            page,
            total_pages: total.div_ceil(PUBLIC_PAGE_SIZE),
        })
    }
}

fn tier(members: &[Member], role: MemberRole) -> Vec<MemberResponse> {
    members
        .iter()
        .filter(|m| m.role == role)
        .map(MemberResponse::from)
        .collect()
}

/// Group a page by first-name initial, keeping page order within each letter
fn group_by_initial(page: Vec<Member>, total: usize) -> GroupedMembers {
    let mut grouped: BTreeMap<String, Vec<MemberResponse>> = BTreeMap::new();
    for member in &page {
        grouped
            .entry(member.initial())
            .or_default()
            .push(MemberResponse::from(member));
    }
    let letters = grouped.keys().cloned().collect();

    GroupedMembers {
        grouped,
        letters,
        flat: member_responses(page),
        total,
    }
}
