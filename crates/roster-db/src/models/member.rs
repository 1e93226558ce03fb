//! Member database model

use serde_json::Value;
use sqlx::FromRow;

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub firstname: String,
    pub lastname: Option<String>,
    pub imageurl: Option<String>,
    pub role: Option<String>,
    pub sociallinks: Option<Value>,
    pub priority: Option<i32>,
}
