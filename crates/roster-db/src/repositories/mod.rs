//! Repository implementations
//!
//! PostgreSQL and in-memory implementations of `MemberRepository`.

mod error;
mod member;
mod memory;

pub use member::PgMemberRepository;
pub use memory::InMemoryMemberRepository;
