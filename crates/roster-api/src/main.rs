//! Roster API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p roster-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).
//! `roster-api hash-password <password>` prints an Argon2 hash suitable
//! for `ADMIN_PASSWORD`.

use roster_common::{hash_password, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("hash-password") {
        std::process::exit(print_password_hash(args.next()));
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let log_format = std::env::var("LOG_FORMAT").ok();
    let tracing_config = TracingConfig::for_environment(config.app.env, log_format.as_deref());
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        backend = ?config.database.backend,
        "Configuration loaded"
    );

    if let Err(e) = roster_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

fn print_password_hash(password: Option<String>) -> i32 {
    let Some(password) = password else {
        eprintln!("usage: roster-api hash-password <password>");
        return 2;
    };

    match hash_password(&password) {
        Ok(hash) => {
            println!("{hash}");
            0
        }
        Err(e) => {
            eprintln!("Failed to hash password: {e}");
            1
        }
    }
}
