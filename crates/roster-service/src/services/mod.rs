//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for the duration of a
//! request and owns no state of its own.

pub mod auth;
pub mod context;
pub mod error;
pub mod listing;
pub mod member;
pub mod upload;

pub use auth::AdminAuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use listing::{ListFilters, ListMode, ListingService, MAX_SEARCH_CHARS, PUBLIC_PAGE_SIZE};
pub use member::MemberService;
pub use upload::UploadService;
