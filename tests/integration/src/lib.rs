//! Integration test utilities for the roster server
//!
//! Spawns the full HTTP application on a local port, backed by the
//! in-memory member store, and drives it with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
