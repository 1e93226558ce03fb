//! # roster-core
//!
//! Domain layer containing the member entity, display ordering, and the
//! store traits the infrastructure layer implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    sort_for_display, Member, MemberQuery, MemberRole, NewMember, RoleFilter, SocialLinks,
};
pub use error::DomainError;
pub use traits::{MemberRepository, ObjectStorage, RepoResult};
