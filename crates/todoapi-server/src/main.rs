//! todoapi server
//!
//! - Config: `TODOAPI_CONFIG` or `./todoapi.yaml` (strict), defaults otherwise
//! - Store: in-memory list or SQLite, chosen by `store.backend`
//! - Graceful shutdown on Ctrl+C / SIGTERM

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todoapi_core::error::{Result, TodoError};
use todoapi_server::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    // Config comes before logging so `log.filter` can apply.
    let cfg = match config::load_from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config load failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cfg.log.filter.as_str().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::TodoApiConfig) -> Result<()> {
    let listen = cfg.server.listen_addr()?;
    let state = app_state::AppState::new(cfg)?;
    tracing::info!(backend = state.store().backend(), "store initialized");

    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TodoError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "todoapi-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TodoError::Internal(format!("serve failed: {e}")))?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
