//! Error handling utilities for repositories

use roster_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "member not found" error
pub fn member_not_found(id: i64) -> DomainError {
    DomainError::MemberNotFound(id)
}
