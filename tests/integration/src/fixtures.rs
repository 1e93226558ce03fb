//! Test fixtures and data generators
//!
//! Request builders and the response shapes the tests read back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Admin password every test server is configured with
pub const ADMIN_PASSWORD: &str = "let-me-in";

/// Create/update body, as sent by the admin form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPayload {
    pub firstname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl MemberPayload {
    pub fn new(firstname: &str) -> Self {
        Self {
            firstname: firstname.to_string(),
            lastname: None,
            image_url: None,
            role: None,
            priority: None,
        }
    }

    pub fn lastname(mut self, lastname: &str) -> Self {
        self.lastname = Some(lastname.to_string());
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Login response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub expires_at: i64,
}

/// Member as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub firstname: String,
    pub lastname: Option<String>,
    pub imageurl: Option<String>,
    pub role: String,
    pub priority: Option<i32>,
}

/// Member listing; `members` differs between public and admin mode
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub members: Value,
    pub founders: Vec<MemberResponse>,
    pub leaders: Vec<MemberResponse>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl ListResponse {
    /// First names in listing order, for either shape
    pub fn flat_names(&self) -> Vec<String> {
        let flat = self.members.get("flat").unwrap_or(&self.members);
        flat.as_array()
            .map(|members| {
                members
                    .iter()
                    .filter_map(|m| m["firstname"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}
