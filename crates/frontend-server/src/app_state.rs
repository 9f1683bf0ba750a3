//! Shared application state for the frontend server.
//!
//! Owns the metrics registry and the simulator. Both are constructed once at
//! startup and shared by every handler through a cheap `Clone`.

use std::sync::Arc;

use frontend_core::error::Result;
use frontend_core::sim::{RandomSimulator, Simulator};

use crate::config::FrontendConfig;
use crate::obs::FrontendMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: FrontendConfig,
    metrics: FrontendMetrics,
    simulator: Arc<dyn Simulator>,
}

impl AppState {
    /// Build application state with the random simulator described by `cfg`.
    pub fn new(cfg: FrontendConfig) -> Result<Self> {
        let simulator = RandomSimulator::new(&cfg.simulation.settings())?;
        Ok(Self::with_simulator(cfg, Arc::new(simulator)))
    }

    /// Build application state around an injected simulator.
    pub fn with_simulator(cfg: FrontendConfig, simulator: Arc<dyn Simulator>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: FrontendMetrics::new(),
                simulator,
            }),
        }
    }

    pub fn cfg(&self) -> &FrontendConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &FrontendMetrics {
        &self.inner.metrics
    }

    pub fn simulator(&self) -> &dyn Simulator {
        self.inner.simulator.as_ref()
    }
}
