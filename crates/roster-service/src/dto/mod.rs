//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::member_responses;
pub use requests::{BulkDeleteRequest, ListMembersParams, LoginRequest, MemberRequest, UploadFile};
pub use responses::{
    DeleteResponse, GroupedMembers, HealthChecks, HealthResponse, ListResponse, LoginResponse,
    MemberResponse, MembersPayload, ReadinessResponse, UploadResponse, ValidateResponse,
};
