//! Process lifecycle: bind, serve, drain on shutdown signal.

use frontend_core::error::{FrontendError, Result};

use crate::{app_state::AppState, router};

/// Bind the configured address and serve until Ctrl+C / SIGTERM.
pub async fn serve(state: AppState) -> Result<()> {
    let listen = state.cfg().server.listen_addr()?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| FrontendError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "frontend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FrontendError::Internal(format!("server failed: {e}")))?;

    tracing::info!("frontend stopped");
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
