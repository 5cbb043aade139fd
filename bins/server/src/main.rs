//! RepairDesk server
//!
//! Main entry point for the repair-tracking web service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repairdesk_api::{AppState, create_router};
use repairdesk_db::{connect, migrate};
use repairdesk_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repairdesk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect(&config.database).await?;
    info!(scheme = ?config.database.scheme, "Connected to database");

    migrate(&db).await?;
    info!("Migrations applied");

    let state = AppState::new(db, &config).context("Failed to build application state")?;
    info!(
        algorithm = %config.jwt.algorithm,
        delete_policy = ?state.delete_policy,
        secure_cookies = state.secure_cookies,
        "Application state ready"
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(app = %config.app.name, version = %config.app.version, "Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
