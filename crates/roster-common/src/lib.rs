//! # roster-common
//!
//! Shared utilities including configuration, error handling, admin authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, AdminClaims, AdminPassword, AdminToken, AdminTokenService};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    DuplicateNamePolicy, Environment, MembersConfig, ServerConfig, StorageConfig, StoreBackend,
};
pub use error::AppError;
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
