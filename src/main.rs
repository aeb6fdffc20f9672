use std::sync::Arc;

use anyhow::Context;

use jobseeker_api::auth::UserDirectory;
use jobseeker_api::config::AppConfig;
use jobseeker_api::store::MemoryJobStore;
use jobseeker_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, JOBBOARD_USERS, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Starting jobseeker API in {:?} mode", config.environment);

    let users = UserDirectory::from_config(&config.security)
        .context("hashing seed user credentials")?;

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);

    let state = AppState {
        store: Arc::new(MemoryJobStore::new()),
        users: Arc::new(users),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("jobseeker API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;

    Ok(())
}
