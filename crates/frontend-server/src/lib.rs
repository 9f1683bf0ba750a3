//! frontend server library entry.
//!
//! This crate wires config, the metrics registry, the simulator and the HTTP
//! routes into a runnable service. It is consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
