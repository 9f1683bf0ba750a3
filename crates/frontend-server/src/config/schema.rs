use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use frontend_core::error::{FrontendError, Result};
use frontend_core::sim::SimulationSettings;

const MAX_DELAY_CEILING_MS: u64 = 60_000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontendConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub simulation: SimulationSection,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            simulation: SimulationSection::default(),
        }
    }
}

impl FrontendConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FrontendError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.simulation.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            FrontendError::BadRequest(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,

    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            failure_rate: default_failure_rate(),
            seed: None,
        }
    }
}

impl SimulationSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_delay_ms > MAX_DELAY_CEILING_MS {
            return Err(FrontendError::BadRequest(format!(
                "simulation.max_delay_ms must be at most {MAX_DELAY_CEILING_MS}"
            )));
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(FrontendError::BadRequest(
                "simulation.min_delay_ms must not exceed max_delay_ms".into(),
            ));
        }
        self.settings().validate()
    }

    pub fn settings(&self) -> SimulationSettings {
        SimulationSettings {
            min_delay: Duration::from_millis(self.min_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            failure_rate: self.failure_rate,
            seed: self.seed,
        }
    }
}

fn default_min_delay_ms() -> u64 {
    50
}
fn default_max_delay_ms() -> u64 {
    800
}
fn default_failure_rate() -> f64 {
    0.1
}
