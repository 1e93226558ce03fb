//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.

use roster_core::{MemberRole, NewMember, SocialLinks};
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::services::{ListFilters, ListMode};

// ============================================================================
// Member Requests
// ============================================================================

/// Create or full-update payload for a member
///
/// Accepts both the camelCase names used by the admin form and the stored
/// lowercase column names.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    #[validate(
        length(max = 100, message = "First name must be 1-100 characters"),
        custom(function = "not_blank", message = "First name is required")
    )]
    pub firstname: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub lastname: Option<String>,

    #[serde(default, alias = "imageurl", deserialize_with = "blank_as_none")]
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub role: MemberRole,

    #[serde(default, alias = "sociallinks")]
    pub social_links: Option<SocialLinks>,

    #[validate(range(min = 0, message = "Priority must not be negative"))]
    pub priority: Option<i32>,
}

impl MemberRequest {
    pub fn new(firstname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: None,
            image_url: None,
            role: MemberRole::Member,
            social_links: None,
            priority: None,
        }
    }

    /// Trimmed store payload; empty social link maps are dropped
    pub fn into_new_member(self) -> NewMember {
        NewMember {
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.map(|s| s.trim().to_string()),
            imageurl: self.image_url.map(|s| s.trim().to_string()),
            role: self.role,
            sociallinks: self.social_links.filter(|links| !links.is_empty()),
            priority: self.priority,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Treat `""` and whitespace-only strings as absent
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Bulk delete payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BulkDeleteRequest {
    #[validate(length(min = 1, message = "At least one id is required"))]
    pub ids: Vec<i64>,
}

/// Query string of the member listing
///
/// Every field is kept as raw text so that malformed values fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersParams {
    pub page: Option<String>,
    pub search: Option<String>,
    pub admin: Option<String>,
    pub last_name_filter: Option<String>,
}

impl ListMembersParams {
    pub fn mode(&self) -> ListMode {
        match self.admin.as_deref() {
            Some("true") => ListMode::Admin,
            _ => ListMode::Public,
        }
    }

    /// 1-based page; missing, malformed or zero becomes 1
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    pub fn filters(&self) -> ListFilters {
        ListFilters::new(self.search.as_deref(), self.last_name_filter.as_deref())
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Admin login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: String,
}

// ============================================================================
// Upload Requests
// ============================================================================

/// An uploaded file as read from a multipart form
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
