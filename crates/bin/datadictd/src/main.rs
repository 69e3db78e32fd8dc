//! # datadictd — attribute dictionary daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the JSON catalog source (adapter) and load the catalog
//! - Construct the dictionary service, injecting the source via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Reload the catalog on SIGHUP, shut down gracefully on SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use datadict_adapter_catalog_json::JsonCatalogSource;
use datadict_adapter_http_axum::state::AppState;
use datadict_app::services::dictionary_service::DictionaryService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Catalog
    let source = JsonCatalogSource::file(&config.catalog.path);
    let dictionary = Arc::new(DictionaryService::new(source));
    dictionary.reload().await.with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.catalog.path.display()
        )
    })?;

    let catalog = dictionary.catalog().await;
    tracing::info!(
        events = catalog.len(),
        data_sources = catalog.data_sources().len(),
        path = %config.catalog.path.display(),
        "catalog ready"
    );
    drop(catalog);

    #[cfg(unix)]
    spawn_reload_on_hangup(Arc::clone(&dictionary))?;

    // HTTP
    let state = AppState::from_arc(dictionary, config.page_settings());
    let app = datadict_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(
        "datadictd listening on http://{bind_addr}{}",
        config.page.path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("datadictd stopped");
    Ok(())
}

/// Reload the catalog from disk whenever the process receives SIGHUP.
///
/// A failed reload keeps the previous catalog in place.
#[cfg(unix)]
fn spawn_reload_on_hangup(
    dictionary: Arc<DictionaryService<JsonCatalogSource>>,
) -> anyhow::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup =
        signal(SignalKind::hangup()).context("failed to install SIGHUP handler")?;
    tokio::spawn(async move {
        while hangup.recv().await.is_some() {
            match dictionary.reload().await {
                Ok(count) => tracing::info!(events = count, "catalog reloaded"),
                Err(err) => {
                    tracing::error!(error = ?err, "catalog reload failed, keeping previous catalog");
                }
            }
        }
    });
    Ok(())
}

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
            Ok(mut term) => {
                term.recv().await;
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
