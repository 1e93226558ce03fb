//! Object storage implementations

mod local;

pub use local::LocalObjectStorage;
