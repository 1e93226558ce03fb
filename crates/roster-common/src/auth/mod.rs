//! Admin authentication utilities

mod password;
mod token;

pub use password::{hash_password, verify_password, AdminPassword};
pub use token::{AdminClaims, AdminToken, AdminTokenService, ADMIN_ROLE};
