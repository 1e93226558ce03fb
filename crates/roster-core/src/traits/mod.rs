//! Traits (ports) implemented by the infrastructure layer

mod repositories;
mod storage;

pub use repositories::{MemberRepository, RepoResult};
pub use storage::ObjectStorage;
