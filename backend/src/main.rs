//! Backend entry-point: loads settings, prepares storage and serves the
//! anime REST API with health probes and OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use anime_backend::config::AppSettings;
use anime_backend::inbound::http::health::HealthState;
use anime_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings.bind_addr();

    let mut config = ServerConfig::new(bind_addr)
        .with_max_page_size(settings.max_page_size())
        .with_bootstrap_account(settings.bootstrap_account());

    if let Some(database_url) = settings.database_url() {
        run_pending_migrations(database_url)
            .await
            .wrap_err("failed to apply database migrations")?;
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)
        .await
        .wrap_err("failed to start HTTP server")?;
    info!(%bind_addr, "anime backend listening");
    server.await.wrap_err("HTTP server terminated")?;
    Ok(())
}

#[cfg(test)]
mod tests;
