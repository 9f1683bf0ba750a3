//! frontend demo server
//!
//! - `GET /`        : greeting after 50-800 ms of simulated work, ~10% 500s
//! - `GET /health`  : liveness
//! - `GET /metrics` : request counter + latency histogram (Prometheus text)
//!
//! Usage: `frontend-server [config.yaml]`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use frontend_core::error::Result;
use frontend_server::{app_state::AppState, config, server};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "frontend failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::args().nth(1);
    let cfg = config::resolve(path.as_deref())?;

    let sim = &cfg.simulation;
    tracing::info!(
        listen = %cfg.server.listen,
        min_delay_ms = sim.min_delay_ms,
        max_delay_ms = sim.max_delay_ms,
        failure_rate = sim.failure_rate,
        seeded = sim.seed.is_some(),
        "frontend starting"
    );

    let state = AppState::new(cfg)?;
    server::serve(state).await
}
