//! frontend core: the error surface and the work simulator.
//!
//! This crate carries no HTTP or runtime dependencies. The server crate wires
//! these pieces into handlers, and tests use them directly to get
//! deterministic delays and failure decisions.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod sim;

/// Shared result type.
pub use error::{FrontendError, Result};
pub use sim::{FixedSimulator, RandomSimulator, SimulationSettings, Simulator};
