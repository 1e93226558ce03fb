//! Service context - dependency container for services
//!
//! Built once at startup and shared across requests.

use std::sync::Arc;

use roster_common::{AdminPassword, AdminTokenService, DuplicateNamePolicy};
use roster_core::{MemberRepository, ObjectStorage};

use super::error::ServiceError;

/// Default upload ceiling: 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Service context containing all dependencies
///
/// Provides access to:
/// - the member store
/// - object storage for uploaded images
/// - the admin password and token service
/// - member policies taken from configuration
#[derive(Clone)]
pub struct ServiceContext {
    member_repo: Arc<dyn MemberRepository>,
    storage: Arc<dyn ObjectStorage>,
    token_service: Arc<AdminTokenService>,
    admin_password: Arc<AdminPassword>,
    duplicate_name_policy: DuplicateNamePolicy,
    max_upload_bytes: usize,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the object storage
    pub fn storage(&self) -> &dyn ObjectStorage {
        self.storage.as_ref()
    }

    /// Get the admin token service
    pub fn token_service(&self) -> &AdminTokenService {
        self.token_service.as_ref()
    }

    /// Get the configured admin password
    pub fn admin_password(&self) -> &AdminPassword {
        self.admin_password.as_ref()
    }

    pub fn duplicate_name_policy(&self) -> DuplicateNamePolicy {
        self.duplicate_name_policy
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("member_repo", &"...")
            .field("storage", &"...")
            .field("duplicate_name_policy", &self.duplicate_name_policy)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    storage: Option<Arc<dyn ObjectStorage>>,
    token_service: Option<Arc<AdminTokenService>>,
    admin_password: Option<AdminPassword>,
    duplicate_name_policy: DuplicateNamePolicy,
    max_upload_bytes: usize,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            member_repo: None,
            storage: None,
            token_service: None,
            admin_password: None,
            duplicate_name_policy: DuplicateNamePolicy::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn storage(mut self, storage: Arc<dyn ObjectStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn token_service(mut self, service: Arc<AdminTokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    pub fn admin_password(mut self, password: AdminPassword) -> Self {
        self.admin_password = Some(password);
        self
    }

    pub fn duplicate_name_policy(mut self, policy: DuplicateNamePolicy) -> Self {
        self.duplicate_name_policy = policy;
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Build the ServiceContext
    ///
    /// Returns an error if any required dependency is missing.
    pub fn build(self) -> Result<ServiceContext, ServiceError> {
        Ok(ServiceContext {
            member_repo: self
                .member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            storage: self
                .storage
                .ok_or_else(|| ServiceError::validation("storage is required"))?,
            token_service: self
                .token_service
                .ok_or_else(|| ServiceError::validation("token_service is required"))?,
            admin_password: Arc::new(
                self.admin_password
                    .ok_or_else(|| ServiceError::validation("admin_password is required"))?,
            ),
            duplicate_name_policy: self.duplicate_name_policy,
            max_upload_bytes: self.max_upload_bytes,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
