use anyhow::{Context as _, Result};
use perfcons_core::ServerConfig;
use perfcons_http::{AppState, AuthConfig, RouteAccess, create_router};
use perfcons_storage::StorageBackend;
use std::sync::Arc;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let config = ServerConfig::from_env()?;

    let storage = StorageBackend::connect(&config.storage)
        .await
        .context("failed to open storage backend")?;
    tracing::info!(backend = storage.name(), "Storage ready");

    let list_access = RouteAccess::protected_if(config.protect_list_all);
    if list_access == RouteAccess::Public {
        tracing::warn!("List-all endpoints are public (PERFCONS_PROTECT_LIST_ALL=false)");
    }

    let state = Arc::new(AppState::new(Arc::new(storage)));
    let router = create_router(state, AuthConfig::new(config.api_token, list_access));

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
