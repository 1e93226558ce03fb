//! HTTP request handlers
//!
//! Handlers extract input, call a service and map the result to a response.

pub mod auth;
pub mod health;
pub mod members;
pub mod upload;
