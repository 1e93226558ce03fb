//! In-memory implementation of MemberRepository
//!
//! Keeps rows in a process-local map. Ids come from a counter guarded by
//! the same lock as the rows, so concurrent inserts never share an id.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use roster_core::{Member, MemberQuery, MemberRepository, NewMember, RepoResult};

use super::error::member_not_found;

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    rows: BTreeMap<i64, Member>,
}

/// Process-local member store
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given members, ids assigned in order
    pub fn with_members(members: impl IntoIterator<Item = NewMember>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.write();
            for member in members {
                state.last_id += 1;
                let id = state.last_id;
                state.rows.insert(id, member.into_member(id));
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.state.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last name ascending with missing names at the end, then id
fn lastname_order(a: &Member, b: &Member) -> std::cmp::Ordering {
    match (&a.lastname, &b.lastname) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
    .then(a.id.cmp(&b.id))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    #[instrument(skip(self))]
    async fn find(&self, query: &MemberQuery) -> RepoResult<Vec<Member>> {
        let mut rows: Vec<Member> = self
            .state
            .read()
            .rows
            .values()
            .filter(|m| query.matches(m.role, &m.firstname, m.lastname.as_deref()))
            .cloned()
            .collect();
        rows.sort_by(lastname_order);
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        Ok(self.state.read().rows.get(&id).cloned())
    }

    async fn find_by_name(&self, firstname: &str, lastname: Option<&str>) -> RepoResult<Vec<Member>> {
        let lastname = lastname.unwrap_or_default();
        Ok(self
            .state
            .read()
            .rows
            .values()
            .filter(|m| {
                eq_ignore_case(&m.firstname, firstname)
                    && eq_ignore_case(m.lastname.as_deref().unwrap_or_default(), lastname)
            })
            .cloned()
            .collect())
    }

    #[instrument(skip(self, member), fields(firstname = %member.firstname))]
    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let mut state = self.state.write();
        state.last_id += 1;
        let created = member.clone().into_member(state.last_id);
        state.rows.insert(created.id, created.clone());
        Ok(created)
    }

    #[instrument(skip(self, member))]
    async fn update(&self, id: i64, member: &NewMember) -> RepoResult<Member> {
        let mut state = self.state.write();
        let row = state.rows.get_mut(&id).ok_or_else(|| member_not_found(id))?;
        *row = member.clone().into_member(id);
        Ok(row.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.state
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| member_not_found(id))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
