//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use roster_common::{AdminPassword, AdminTokenService, AppConfig, AppError, StoreBackend};
use roster_core::MemberRepository;
use roster_db::{
    create_pool, run_migrations, InMemoryMemberRepository, LocalObjectStorage, PgMemberRepository,
};
use roster_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router(&config.storage);
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Open the configured member store
async fn create_member_repo(config: &AppConfig) -> Result<Arc<dyn MemberRepository>, AppError> {
    match config.database.backend {
        StoreBackend::Memory => {
            warn!("Using the in-memory member store; data is lost on restart");
            Ok(Arc::new(InMemoryMemberRepository::new()))
        }
        StoreBackend::Postgres => {
            let url = config
                .database
                .url
                .clone()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let db_config = roster_db::DatabaseConfig {
                url,
                max_connections: config.database.max_connections,
                min_connections: config.database.min_connections,
                ..Default::default()
            };
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if config.database.run_migrations {
                run_migrations(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("Migrations applied");
            }

            Ok(Arc::new(PgMemberRepository::new(pool)))
        }
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let member_repo = create_member_repo(&config).await?;

    let storage = Arc::new(LocalObjectStorage::new(
        &config.storage.upload_dir,
        &config.storage.public_base_url,
    ));

    let token_service = Arc::new(AdminTokenService::new(
        &config.admin.token_secret,
        config.admin.token_ttl_secs,
    ));

    let service_context = ServiceContextBuilder::new()
        .member_repo(member_repo)
        .storage(storage)
        .token_service(token_service)
        .admin_password(AdminPassword::from_config(&config.admin.password))
        .duplicate_name_policy(config.members.duplicate_name_policy)
        .max_upload_bytes(config.storage.max_file_size_bytes())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
