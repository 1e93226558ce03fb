//! Configuration structs

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    DuplicateNamePolicy, Environment, MembersConfig, ServerConfig, StorageConfig, StoreBackend,
};
