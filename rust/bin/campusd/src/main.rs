//! `campusd` — the Campus Connect server binary.
//!
//! Usage:
//!   campusd -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/campus/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod auth_middleware;
mod bootstrap;
mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use campus_auth::AuthModule;
use campus_auth::service::AuthConfig;
use campus_comms::CommsModule;
use campus_core::Module;
use campus_coursework::CourseworkModule;
use campus_groups::GroupsModule;
use campus_store::{DocStore, SqliteStore};

use config::ServerConfig;

/// Campus Connect server.
#[derive(Parser, Debug)]
#[command(name = "campusd", about = "Campus Connect server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address (overrides default 0.0.0.0:8080).
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;

    // Verify configuration is valid.
    bootstrap::verify_config(&server_config)?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;
    let store: Arc<dyn DocStore> = Arc::new(
        SqliteStore::open(&data_dir.join("campus.sqlite"))
            .map_err(|e| anyhow::anyhow!("failed to open store: {}", e))?,
    );

    // Initialize modules. Comms and coursework share the groups
    // service for membership verdicts.
    let auth_config = AuthConfig {
        jwt_secret: server_config.jwt.secret.clone(),
        token_ttl: server_config.jwt.expire_secs,
    };
    let auth_module = AuthModule::new(Arc::clone(&store), auth_config)?;
    info!("Auth module initialized");

    let groups_module = GroupsModule::new(Arc::clone(&store))?;
    info!("Groups module initialized");

    let comms_module = CommsModule::new(Arc::clone(&store), groups_module.service().clone())?;
    info!("Comms module initialized");

    let coursework_module = CourseworkModule::new(store, groups_module.service().clone())?;
    info!("Coursework module initialized");

    // Bootstrap: ensure the admin identity exists.
    bootstrap::ensure_admin(auth_module.service(), &server_config)?;

    // Build router.
    let modules: Vec<&dyn Module> = vec![
        &auth_module,
        &groups_module,
        &comms_module,
        &coursework_module,
    ];
    let app = routes::build_router(auth_module.service().clone(), &modules);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("Campus Connect server listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
