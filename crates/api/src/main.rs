use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use event_scheduler_api::{app, config, middleware};
use persistence::PgSchedulingStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!("Starting Event Scheduler v{}", env!("CARGO_PKG_VERSION"));

    let pool = persistence::db::create_pool(&config.database.pool_config()).await?;

    info!("Running database migrations...");
    persistence::db::run_migrations(&pool).await?;
    info!("Migrations completed");

    let addr = config
        .socket_addr()
        .context("Invalid server host/port")?;
    let app = app::create_app(config, Arc::new(PgSchedulingStore::new(pool)));

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
