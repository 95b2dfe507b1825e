use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use tax_core::{TaxService, TaxTable};
use tax_server::{AppState, ServerConfig, logging, router};

// ─── shutdown ────────────────────────────────────────────────────────────────

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(?error, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init_logging(&config.log_level, config.log_file.as_deref())?;

    let table = TaxTable::builtin();
    table.validate().context("tax bracket table is invalid")?;
    info!(years = ?table.years().collect::<Vec<_>>(), "loaded tax brackets");

    if config.uses_default_api_key() {
        warn!("using the default API key; set TAX_SERVER_API_KEY or --api-key");
    }

    let state = AppState::new(TaxService::new(Arc::new(table)), &config.api_key);
    let app = router(state, config.request_timeout());

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("cannot bind {}", config.bind))?;
    info!(addr = %config.bind, timeout = ?config.request_timeout(), "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}
