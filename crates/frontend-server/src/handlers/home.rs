//! `GET /`: greeting behind simulated backend work.

use axum::{extract::State, http::StatusCode};
use tokio::time::Instant;

use crate::app_state::AppState;

pub const GREETING: &str = "Hello from frontend 👋\n";
pub const INTERNAL_ERROR: &str = "Internal Server Error\n";

const METHOD: &str = "GET";
const PATH: &str = "/";

pub async fn home(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let start = Instant::now();

    let delay = state.simulator().delay();
    tokio::time::sleep(delay).await;

    let (status, body) = if state.simulator().should_fail() {
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    } else {
        (StatusCode::OK, GREETING)
    };

    // Counted and observed exactly once, whatever the outcome.
    let elapsed = start.elapsed();
    let metrics = state.metrics();
    metrics.count_request(METHOD, PATH, status.as_u16());
    metrics.observe_latency(METHOD, PATH, elapsed);

    if status.is_server_error() {
        tracing::warn!(?delay, ?elapsed, status = status.as_u16(), "simulated failure");
    } else {
        tracing::debug!(?delay, ?elapsed, status = status.as_u16(), "greeting served");
    }

    (status, body)
}
