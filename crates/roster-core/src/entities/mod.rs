//! Domain entities - core business objects

mod member;
mod query;
mod role;

pub use member::{sort_for_display, Member, NewMember, SocialLinks};
pub use query::{MemberQuery, RoleFilter};
pub use role::MemberRole;
