//! Route definitions
//!
//! API routes live under `/api`; health probes sit at the root.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use roster_common::StorageConfig;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};

use crate::handlers::{auth, health, members, upload};
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the main API router
pub fn create_router(storage: &StorageConfig) -> Router<AppState> {
    let router = Router::new()
        .merge(health_routes())
        .nest("/api", api_routes(storage.max_file_size_bytes()));

    // Serve stored images when they are published under a local path
    let mount = storage.public_base_url.trim_end_matches('/');
    if mount.starts_with('/') && mount.len() > 1 {
        router.nest_service(mount, ServeDir::new(&storage.upload_dir))
    } else {
        router
    }
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .merge(auth_routes())
        .merge(upload_routes(max_upload_bytes))
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/members",
            get(members::list_members)
                .post(members::create_member)
                .delete(members::delete_members),
        )
        .route(
            "/members/:id",
            put(members::update_member).delete(members::delete_member),
        )
}

/// Admin login and token check
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth", post(auth::login).get(auth::validate))
}

/// Image upload; the body cap is raised to fit one image
fn upload_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload::upload_image))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
}
