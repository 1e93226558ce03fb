//! Axum extractors for request handling
//!
//! Custom extractors for admin authentication, validated bodies and path ids.

mod auth;
mod path;
mod validated;

pub use auth::{AdminAuth, BearerToken};
pub use path::MemberIdPath;
pub use validated::ValidatedJson;
