//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Member, MemberQuery, NewMember};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// All rows matching the query, ordered by last name (missing last, then id)
    async fn find(&self, query: &MemberQuery) -> RepoResult<Vec<Member>>;

    /// Find member by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Members whose first and last name match case-insensitively
    async fn find_by_name(&self, firstname: &str, lastname: Option<&str>) -> RepoResult<Vec<Member>>;

    /// Insert a member; the store assigns the id
    async fn create(&self, member: &NewMember) -> RepoResult<Member>;

    /// Replace all fields of an existing member
    async fn update(&self, id: i64, member: &NewMember) -> RepoResult<Member>;

    /// Delete a member by ID
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Cheap connectivity check for readiness probes
    async fn ping(&self) -> RepoResult<()>;
}
