//! # roster-service
//!
//! Application layer: the public and admin member listings, member
//! administration, the admin token gate, and image uploads.

pub mod dto;
pub mod services;

pub use services::{
    AdminAuthService, ListFilters, ListMode, ListingService, MemberService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UploadService, PUBLIC_PAGE_SIZE,
};
