//! # serveryd: servery daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations and the catalog lookup
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use servery_adapter_http_axum::state::AppState;
use servery_adapter_storage_sqlite_sqlx::{
    SqliteCatalog, SqliteMenuGroupRepository, SqliteMenuRepository, SqliteOrderRepository,
    SqliteOrderTableRepository, SqliteProductRepository, SqliteTableGroupRepository,
};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = servery_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("opening database")?;
    let pool = db.pool().clone();

    // Repositories
    let product_repo = SqliteProductRepository::new(pool.clone());
    let menu_group_repo = SqliteMenuGroupRepository::new(pool.clone());
    let menu_repo = SqliteMenuRepository::new(pool.clone());
    let table_repo = SqliteOrderTableRepository::new(pool.clone());
    let table_group_repo = SqliteTableGroupRepository::new(pool.clone());
    let order_repo = SqliteOrderRepository::new(pool.clone());
    let catalog = SqliteCatalog::new(pool);

    // HTTP
    let state = AppState::new(
        product_repo,
        menu_group_repo,
        menu_repo,
        table_repo,
        table_group_repo,
        order_repo,
        catalog,
    );
    let app = servery_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, "serveryd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("serveryd stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where it exists.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
