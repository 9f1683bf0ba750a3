//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness (counted, no latency observation)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::obs::metrics::CONTENT_TYPE;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics().count_request("GET", "/health", StatusCode::OK.as_u16());
    (StatusCode::OK, "OK\n")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}
