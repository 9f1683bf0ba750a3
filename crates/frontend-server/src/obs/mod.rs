//! Lightweight in-process metrics.
//!
//! Instruments are stored as atomics in sharded maps and rendered by the
//! `/metrics` handler in the Prometheus text format.

pub mod metrics;

pub use metrics::{FrontendMetrics, HistogramSnapshot};
