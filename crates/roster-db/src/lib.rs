//! # roster-db
//!
//! Persistence layer implementing the `roster-core` ports.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgMemberRepository` for PostgreSQL and `InMemoryMemberRepository`
//!   for demos and tests
//! - `LocalObjectStorage`, a filesystem-backed image store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::{create_pool, DatabaseConfig, PgMemberRepository};
//! use roster_core::{MemberQuery, MemberRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     let repo = PgMemberRepository::new(pool);
//!     let everyone = repo.find(&MemberQuery::all()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod storage;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{InMemoryMemberRepository, PgMemberRepository};
pub use storage::LocalObjectStorage;
