//! Contact App - main entry point
//!
//! Loads configuration, opens the contact store, and serves the web
//! application until interrupted.

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use contact_app::store::{ContactStore, InMemoryContactStore, JsonFileContactStore};
use contact_app::{AppState, Config};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Initialize the store
    let store: Arc<dyn ContactStore> = match &config.data_file {
        Some(path) => {
            let store = JsonFileContactStore::open(path)
                .await
                .with_context(|| format!("opening contact file {}", path.display()))?;
            Arc::new(store)
        }
        None => {
            info!("No CONTACTS_DATA_FILE set, contacts are kept in memory");
            Arc::new(InMemoryContactStore::new())
        }
    };

    let state = AppState::from_config(store, &config)?;

    // Expired flash messages are never handed out, but they still occupy memory.
    let flash = state.flash().clone();
    let sweep_every = config.session_ttl().max(std::time::Duration::from_secs(60));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_every);
        loop {
            interval.tick().await;
            flash.cleanup_expired();
        }
    });

    let app = contact_app::app(state, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    info!(
        "Contact app listening at http://{} (phone region {}, session TTL {} ms)",
        addr, config.phone_region, config.session_max_age_ms
    );

    if let Err(e) = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Contact app shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
