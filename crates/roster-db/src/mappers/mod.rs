//! Entity to model mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Write` structs: Prepare entity data for database operations

mod member;

pub use member::{social_links_from_json, MemberWrite};
