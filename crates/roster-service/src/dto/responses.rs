//! Response DTOs for API endpoints
//!
//! Member fields keep their stored lowercase names (`imageurl`,
//! `sociallinks`); envelope fields are camelCase.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use roster_core::{MemberRole, SocialLinks};
use serde::Serialize;

// ============================================================================
// Member Responses
// ============================================================================

/// A member as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub firstname: String,
    pub lastname: Option<String>,
    pub imageurl: Option<String>,
    pub role: MemberRole,
    pub sociallinks: Option<SocialLinks>,
    pub priority: Option<i32>,
}

/// Public page grouped by first-name initial
#[derive(Debug, Clone, Serialize)]
pub struct GroupedMembers {
    pub grouped: BTreeMap<String, Vec<MemberResponse>>,
    pub letters: Vec<String>,
    pub flat: Vec<MemberResponse>,
    pub total: usize,
}

/// `members` field of the listing: a flat list for admins, grouped otherwise
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MembersPayload {
    Flat(Vec<MemberResponse>),
    Grouped(GroupedMembers),
}

impl MembersPayload {
    /// Members in listing order, regardless of shape
    pub fn flat(&self) -> &[MemberResponse] {
        match self {
            Self::Flat(members) => members,
            Self::Grouped(grouped) => &grouped.flat,
        }
    }
}

/// Member listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub members: MembersPayload,
    pub founders: Vec<MemberResponse>,
    pub leaders: Vec<MemberResponse>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Result of a single or bulk delete
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<usize>,
}

impl DeleteResponse {
    pub fn single() -> Self {
        Self {
            success: true,
            deleted: None,
        }
    }

    pub fn bulk(deleted: usize) -> Self {
        Self {
            success: true,
            deleted: Some(deleted),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Successful admin login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    /// Unix milliseconds
    pub expires_at: i64,
}

/// Token check result
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    pub valid: bool,
}

impl ValidateResponse {
    pub fn valid() -> Self {
        Self {
            success: true,
            valid: true,
        }
    }
}

// ============================================================================
// Upload Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
